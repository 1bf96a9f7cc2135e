use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const STATE_FILE_NAME: &str = "kamus-state.json";

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Where history/favorites live between sessions.
    pub state_path: PathBuf,
}

impl StorageConfig {
    pub fn new() -> Self {
        let state_path = env::var("KAMUS_STATE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_state_path());

        Self { state_path }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_path: default_state_path(),
        }
    }
}

fn default_state_path() -> PathBuf {
    match env::var("HOME") {
        Ok(home) => PathBuf::from(home).join(".kamus").join(STATE_FILE_NAME),
        Err(_) => PathBuf::from(STATE_FILE_NAME),
    }
}
