use async_trait::async_trait;
use kamus_types::LookupResult;

pub mod client;
pub mod error;
pub mod parse;

pub use client::KbbiClient;
pub use error::LookupError;

/// Lexical backend interface. The app talks to this, not to the HTTP
/// client, so lookups can be driven against a fake in tests.
#[async_trait]
pub trait Lexicon: Send + Sync {
    /// Look up a user-supplied term.
    async fn search(&self, query: &str) -> Result<LookupResult, LookupError>;

    /// Fetch the server-selected featured lemma.
    async fn word_of_the_day(&self) -> Result<LookupResult, LookupError>;

    /// Fetch a random lemma.
    async fn random_entry(&self) -> Result<LookupResult, LookupError>;
}
