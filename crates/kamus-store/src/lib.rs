use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const HISTORY_LIMIT: usize = 50;

/// The one durable entity: recent lookups plus favorite lemmas,
/// pretty-printed JSON rewritten wholesale after every mutation.
#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
struct PersistedState {
    history: Vec<String>,
    favorites: Vec<String>,
}

/// Recency-ordered, deduplicated lookup history (index 0 = most recent,
/// capped at 50) and an independent favorites set. Losing this data must
/// never fail a lookup, so persistence errors are logged and swallowed and
/// the store keeps going in memory.
pub struct HistoryStore {
    path: PathBuf,
    state: PersistedState,
}

impl HistoryStore {
    /// Never fails: a missing or unreadable file starts the session empty.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let state = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("discarding unreadable state file {}: {e}", path.display());
                PersistedState::default()
            }),
            Err(_) => PersistedState::default(),
        };

        Self { path, state }
    }

    pub fn record_history(&mut self, lemma: &str) {
        if lemma.is_empty() {
            return;
        }

        // Re-adding an existing lemma moves it to the front.
        self.state.history.retain(|h| h != lemma);
        self.state.history.insert(0, lemma.to_string());
        self.state.history.truncate(HISTORY_LIMIT);
        self.save();
    }

    pub fn remove_history(&mut self, lemma: &str) {
        let before = self.state.history.len();
        self.state.history.retain(|h| h != lemma);
        if self.state.history.len() != before {
            self.save();
        }
    }

    pub fn clear_history(&mut self) {
        self.state.history.clear();
        self.save();
    }

    pub fn add_favorite(&mut self, lemma: &str) {
        if lemma.is_empty() || self.is_favorite(lemma) {
            return;
        }

        self.state.favorites.insert(0, lemma.to_string());
        self.save();
    }

    pub fn remove_favorite(&mut self, lemma: &str) {
        let before = self.state.favorites.len();
        self.state.favorites.retain(|f| f != lemma);
        if self.state.favorites.len() != before {
            self.save();
        }
    }

    pub fn is_favorite(&self, lemma: &str) -> bool {
        self.state.favorites.iter().any(|f| f == lemma)
    }

    pub fn history(&self) -> &[String] {
        &self.state.history
    }

    pub fn favorites(&self) -> &[String] {
        &self.state.favorites
    }

    fn save(&self) {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            let _ = fs::create_dir_all(parent);
        }

        match serde_json::to_string_pretty(&self.state) {
            Ok(json) => {
                if let Err(e) = fs::write(&self.path, json) {
                    tracing::warn!("failed to persist {}: {e}", self.path.display());
                }
            }
            Err(e) => tracing::warn!("failed to serialize state: {e}"),
        }
    }
}
