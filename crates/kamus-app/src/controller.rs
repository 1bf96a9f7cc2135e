use std::sync::Arc;

use kamus_client::Lexicon;
use kamus_store::HistoryStore;
use kamus_types::{AppEvent, LookupRequest};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::lookup::LookupOutcome;
use crate::session::Session;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub lookup_done: (AsyncSender<LookupOutcome>, AsyncReceiver<LookupOutcome>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64),
            ui_to_app: kanal::bounded_async(64),
            lookup_done: kanal::bounded_async(1), // at most one in-flight lookup
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    api: Arc<dyn Lexicon>,
    session: Arc<Session>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(api: Arc<dyn Lexicon>, session: Arc<Session>) -> Self {
        Self {
            channels: ChannelSet::new(),
            api,
            session,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(
        &self,
        store: HistoryStore,
        initial: Option<LookupRequest>,
        interactive: bool,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.api.clone(),
            store,
            self.channels.ui_to_app.1.clone(),
            self.channels.app_to_ui.0.clone(),
            self.channels.lookup_done.0.clone(),
            self.channels.lookup_done.1.clone(),
            self.cancel_token.child_token(),
        ));

        // Terminal frontend
        tasks.spawn(ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
            self.session.clone(),
            initial,
            interactive,
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
