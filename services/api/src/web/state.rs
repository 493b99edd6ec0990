//! services/api/src/web/state.rs
//!
//! Defines the application's shared state and the chat session it carries.

use crate::config::{Config, ConfigError};
use finmate_core::app_state::LoadingIndicator;
use finmate_core::conversation::Conversation;
use finmate_core::ports::{GoalStore, TransactionStore};
use finmate_core::views::ChatView;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio_util::task::TaskTracker;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
///
/// The loading flag has a single writer: the `PUT /state/loading` handler.
/// Every other handler only reads it.
pub struct AppState {
    pub config: Arc<Config>,
    pub goal_store: Arc<dyn GoalStore>,
    pub transaction_store: Arc<dyn TransactionStore>,
    pub loading: Arc<LoadingIndicator>,
    pub chat: Arc<Mutex<ChatSession>>,
    /// Deferred assistant replies still sleeping.
    pub reply_tasks: TaskTracker,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        goal_store: Arc<dyn GoalStore>,
        transaction_store: Arc<dyn TransactionStore>,
    ) -> Result<Self, ConfigError> {
        let chat = ChatSession::new(config.reply_delay_chrono()?);
        Ok(Self {
            config,
            goal_store,
            transaction_store,
            loading: Arc::new(LoadingIndicator::new()),
            chat: Arc::new(Mutex::new(chat)),
            reply_tasks: TaskTracker::new(),
        })
    }
}

//=========================================================================================
// ChatSession (The Mounted Chat View)
//=========================================================================================

/// The currently mounted chat view.
///
/// `epoch` changes on every remount, so replies scheduled against an earlier
/// mount can tell they no longer have anywhere to land.
pub struct ChatSession {
    pub epoch: u64,
    pub view: ChatView,
    reply_delay: chrono::Duration,
}

impl ChatSession {
    pub fn new(reply_delay: chrono::Duration) -> Self {
        Self {
            epoch: 0,
            view: ChatView::new(Conversation::with_reply_delay(reply_delay)),
            reply_delay,
        }
    }

    /// Discards the conversation and the input buffer.
    pub fn remount(&mut self) {
        self.epoch += 1;
        self.view = ChatView::new(Conversation::with_reply_delay(self.reply_delay));
    }
}
