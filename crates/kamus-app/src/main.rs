use std::sync::Arc;

use clap::Parser;
use kamus_client::{KbbiClient, Lexicon};
use kamus_config::Config;
use kamus_store::HistoryStore;
use kamus_types::LookupRequest;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod lookup;
pub mod session;
pub mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::session::Session;

/// Kamus Besar Bahasa Indonesia dari terminal
#[derive(Parser)]
#[command(name = "kamus", version)]
struct Cli {
    /// Kata yang dicari; tanpa argumen masuk ke mode interaktif
    word: Option<String>,

    /// Ambil kata hari ini
    #[arg(long, conflicts_with_all = ["word", "random"])]
    wotd: bool,

    /// Ambil satu kata acak
    #[arg(long, conflicts_with = "word")]
    random: bool,
}

impl Cli {
    fn initial_request(&self) -> Option<LookupRequest> {
        if self.wotd {
            Some(LookupRequest::WordOfTheDay)
        } else if self.random {
            Some(LookupRequest::Random)
        } else {
            self.word.clone().map(LookupRequest::Term)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::new();

    let api: Arc<dyn Lexicon> = Arc::new(KbbiClient::new(&config.api)?);
    let store = HistoryStore::load(config.storage.state_path.clone());
    let session = Arc::new(Session::new());

    let initial = cli.initial_request();
    let interactive = initial.is_none();

    let controller = AppController::new(api, session.clone());
    let mut tasks = controller.spawn_tasks(store, initial, interactive);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown requested");
            controller.shutdown();
        }
        result = tasks.join_next() => {
            // one loop finishing ends the app; the rest are aborted when
            // the JoinSet drops
            match result {
                Some(Ok(Err(e))) => tracing::error!("task exited with error: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                _ => {}
            }
            controller.shutdown();
        }
    }

    session.close();
    Ok(())
}
