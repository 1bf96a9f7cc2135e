use thiserror::Error;

/// What a lookup can fail with. Messages are user-facing and read aloud,
/// hence Indonesian.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("entri tidak ditemukan")]
    NotFound,

    #[error("gagal menghubungi server: {0}")]
    Transport(String),

    #[error("format data tidak valid")]
    InvalidFormat,
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::InvalidFormat
        } else {
            LookupError::Transport(err.to_string())
        }
    }
}
