use std::sync::Arc;

use kamus_client::{Lexicon, LookupError};
use kamus_core::format;
use kamus_core::state::LookupPhase;
use kamus_store::HistoryStore;
use kamus_types::{AppEvent, LookupRequest, LookupResult};
use kanal::AsyncSender;

pub type LookupOutcome = Result<LookupResult, LookupError>;

/// Drives one logical lookup end to end: guards against overlapping
/// requests, runs the backend call on a worker task, then applies the
/// outcome (store update, rendering, UI notices) back on the event-loop
/// task that owns all mutable state.
pub struct LookupController {
    api: Arc<dyn Lexicon>,
    store: HistoryStore,
    phase: LookupPhase,
    app_to_ui: AsyncSender<AppEvent>,
    done_tx: AsyncSender<LookupOutcome>,
}

impl LookupController {
    pub fn new(
        api: Arc<dyn Lexicon>,
        store: HistoryStore,
        app_to_ui: AsyncSender<AppEvent>,
        done_tx: AsyncSender<LookupOutcome>,
    ) -> Self {
        Self {
            api,
            store,
            phase: LookupPhase::default(),
            app_to_ui,
            done_tx,
        }
    }

    pub fn phase(&self) -> LookupPhase {
        self.phase
    }

    /// Start a lookup unless one is already in flight. Returns whether the
    /// request was accepted; a refused request issues no network call.
    pub async fn run(&mut self, request: LookupRequest) -> anyhow::Result<bool> {
        if !self.phase.can_start() {
            tracing::debug!("lookup already in flight, ignoring {request:?}");
            return Ok(false);
        }

        self.phase = LookupPhase::Loading;
        self.app_to_ui.send(AppEvent::LookupStarted).await?;

        let api = self.api.clone();
        let done_tx = self.done_tx.clone();
        tokio::spawn(async move {
            let outcome = match request {
                LookupRequest::Term(query) => api.search(&query).await,
                LookupRequest::WordOfTheDay => api.word_of_the_day().await,
                LookupRequest::Random => api.random_entry().await,
            };

            // No cancellation: the outcome is always delivered, even if the
            // UI went away while we were fetching.
            if let Err(e) = done_tx.send(outcome).await {
                tracing::warn!("lookup outcome had no receiver: {e}");
            }
        });

        Ok(true)
    }

    /// Completion half of `run`, invoked by the event loop.
    pub async fn finish(&mut self, outcome: LookupOutcome) -> anyhow::Result<()> {
        match outcome {
            Ok(result) => {
                self.phase = LookupPhase::Success;
                self.store.record_history(&result.lemma);

                let rendered = format::render(&result);
                let is_favorite = self.store.is_favorite(&result.lemma);
                self.app_to_ui
                    .send(AppEvent::LookupSucceeded {
                        rendered,
                        lemma: result.lemma,
                        is_favorite,
                    })
                    .await?;
                self.notify_history().await?;
            }
            Err(e) => {
                self.phase = LookupPhase::Failed;
                self.app_to_ui
                    .send(AppEvent::LookupFailed {
                        message: e.to_string(),
                    })
                    .await?;
            }
        }

        self.phase = LookupPhase::Idle;
        Ok(())
    }

    pub async fn toggle_favorite(&mut self, lemma: &str) -> anyhow::Result<()> {
        if self.store.is_favorite(lemma) {
            self.store.remove_favorite(lemma);
        } else {
            self.store.add_favorite(lemma);
        }
        self.notify_favorites().await
    }

    pub async fn delete_history_item(&mut self, lemma: &str) -> anyhow::Result<()> {
        self.store.remove_history(lemma);
        self.notify_history().await
    }

    pub async fn clear_history(&mut self) -> anyhow::Result<()> {
        self.store.clear_history();
        self.notify_history().await
    }

    pub async fn delete_favorite(&mut self, lemma: &str) -> anyhow::Result<()> {
        self.store.remove_favorite(lemma);
        self.notify_favorites().await
    }

    pub async fn show_history(&mut self) -> anyhow::Result<()> {
        self.notify_history().await
    }

    pub async fn show_favorites(&mut self) -> anyhow::Result<()> {
        self.notify_favorites().await
    }

    async fn notify_history(&self) -> anyhow::Result<()> {
        self.app_to_ui
            .send(AppEvent::HistoryChanged(self.store.history().to_vec()))
            .await?;
        Ok(())
    }

    async fn notify_favorites(&self) -> anyhow::Result<()> {
        self.app_to_ui
            .send(AppEvent::FavoritesChanged(self.store.favorites().to_vec()))
            .await?;
        Ok(())
    }
}
