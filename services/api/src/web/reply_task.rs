//! services/api/src/web/reply_task.rs
//!
//! The deferred worker that lands the placeholder assistant reply.

use crate::web::state::{AppState, ChatSession};
use chrono::Utc;
use finmate_core::conversation::PendingReply;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Schedules the reply for one accepted submission on the shared tracker.
pub fn spawn_reply(app_state: &AppState, epoch: u64, reply: PendingReply) {
    let chat = app_state.chat.clone();
    let delay = app_state.config.reply_delay;
    app_state
        .reply_tasks
        .spawn(reply_process(chat, epoch, reply, delay));
}

/// Waits out the reply delay, then delivers the reply owed to `reply.submission`.
///
/// There is no cancellation. If the chat was remounted in the meantime the
/// reply is dropped, since the conversation it belonged to no longer exists.
pub async fn reply_process(
    chat: Arc<Mutex<ChatSession>>,
    epoch: u64,
    reply: PendingReply,
    delay: Duration,
) {
    tokio::time::sleep(delay).await;

    let mut session = chat.lock().await;
    if session.epoch != epoch {
        info!(
            "Chat was remounted; dropping reply for submission {}.",
            reply.submission
        );
        return;
    }

    let delivered = session
        .view
        .conversation_mut()
        .deliver_reply(reply.submission, Utc::now());
    if delivered.is_empty() {
        debug!(
            "Reply for submission {} was already delivered.",
            reply.submission
        );
    } else {
        info!(
            "Delivered {} assistant reply(ies) through submission {}.",
            delivered.len(),
            reply.submission
        );
    }
}
