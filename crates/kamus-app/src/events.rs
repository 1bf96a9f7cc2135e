use std::sync::Arc;

use kamus_client::Lexicon;
use kamus_core::state::LookupPhase;
use kamus_store::HistoryStore;
use kamus_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

use crate::lookup::{LookupController, LookupOutcome};

/// App's main loop: the single task that owns the controller (and through
/// it the history store). UI requests and lookup outcomes both land here,
/// so every state mutation happens on one task.
pub async fn event_loop(
    api: Arc<dyn Lexicon>,
    store: HistoryStore,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    done_tx: AsyncSender<LookupOutcome>,
    done_rx: AsyncReceiver<LookupOutcome>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut controller = LookupController::new(api, store, app_to_ui_tx, done_tx);

    tracing::debug!("event loop started");
    loop {
        tokio::select! {
            event = ui_to_app_rx.recv() => {
                if !handle_event(&mut controller, event?).await? {
                    break;
                }
            }
            outcome = done_rx.recv() => {
                controller.finish(outcome?).await?;
            }
            _ = cancel.cancelled() => {
                tracing::debug!("event loop cancelled");
                break;
            }
        }
    }

    Ok(())
}

/// Returns false when the loop should stop.
async fn handle_event(
    controller: &mut LookupController,
    event: AppEvent,
) -> anyhow::Result<bool> {
    match event {
        AppEvent::Lookup(request) => {
            controller.run(request).await?;
        }
        AppEvent::ToggleFavorite { lemma } => controller.toggle_favorite(&lemma).await?,
        AppEvent::DeleteHistoryItem { lemma } => controller.delete_history_item(&lemma).await?,
        AppEvent::ClearHistory => controller.clear_history().await?,
        AppEvent::DeleteFavorite { lemma } => controller.delete_favorite(&lemma).await?,
        AppEvent::ShowHistory => controller.show_history().await?,
        AppEvent::ShowFavorites => controller.show_favorites().await?,
        AppEvent::Close => {
            if controller.phase() == LookupPhase::Loading {
                tracing::info!("closing with a lookup still in flight");
            }
            tracing::info!("close requested, leaving event loop");
            return Ok(false);
        }
        other => {
            // UI-bound notices have no business on this channel
            tracing::debug!("ignoring event not meant for the backend: {other:?}");
        }
    }

    Ok(true)
}
