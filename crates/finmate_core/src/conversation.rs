//! crates/finmate_core/src/conversation.rs
//!
//! The placeholder conversational exchange.
//!
//! Every accepted user turn schedules exactly one assistant turn carrying
//! [`CANNED_REPLY`]. Replies are explicit [`PendingReply`] records keyed by the
//! submission that produced them, so callers decide when time passes: the web
//! service drives them from a timer task, tests drive them with
//! [`Conversation::advance_to`].

use crate::domain::{Message, MessageId, Role};
use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;

/// The fixed content of every assistant turn.
pub const CANNED_REPLY: &str = "This is a placeholder response from the AI assistant.";

/// Default latency between a user turn and its assistant turn, in milliseconds.
pub const DEFAULT_REPLY_DELAY_MS: i64 = 1000;

/// An assistant turn that has been scheduled but not yet appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReply {
    /// The user turn this reply answers.
    pub submission: MessageId,
    pub due_at: DateTime<Utc>,
}

/// Where the exchange currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    Idle,
    /// One or more replies are in flight. Submissions are never blocked.
    AwaitingReply { pending: usize },
}

/// An append-only sequence of turns plus the replies still owed.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    pending: VecDeque<PendingReply>,
    next_id: u64,
    reply_delay: Duration,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self::with_reply_delay(Duration::milliseconds(DEFAULT_REPLY_DELAY_MS))
    }

    pub fn with_reply_delay(reply_delay: Duration) -> Self {
        Self {
            messages: Vec::new(),
            pending: VecDeque::new(),
            next_id: 1,
            reply_delay,
        }
    }

    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Replies still owed, in the order they were scheduled.
    pub fn pending_replies(&self) -> impl Iterator<Item = &PendingReply> {
        self.pending.iter()
    }

    pub fn state(&self) -> ConversationState {
        match self.pending.len() {
            0 => ConversationState::Idle,
            pending => ConversationState::AwaitingReply { pending },
        }
    }

    /// Appends a user turn and schedules its reply.
    ///
    /// Blank or whitespace-only content is ignored and returns `None`.
    /// Accepted content is stored as given, without trimming.
    ///
    /// A turn whose reply could not be scheduled (`now + reply_delay` falls
    /// outside the representable range) is refused the same way, so a user
    /// turn is never left without its reply.
    pub fn submit(&mut self, content: &str, now: DateTime<Utc>) -> Option<PendingReply> {
        if content.trim().is_empty() {
            return None;
        }
        let due_at = now.checked_add_signed(self.reply_delay)?;

        let submission = self.push(Role::User, content.to_string(), now).id;
        let reply = PendingReply { submission, due_at };
        self.pending.push_back(reply);
        Some(reply)
    }

    /// Delivers the reply owed to `submission`.
    ///
    /// Replies scheduled before it are delivered first, so arrival order always
    /// matches scheduling order even if the timers wake out of order. Returns
    /// the assistant turns appended, empty if the submission was already
    /// answered or is unknown.
    pub fn deliver_reply(&mut self, submission: MessageId, now: DateTime<Utc>) -> Vec<Message> {
        let Some(position) = self
            .pending
            .iter()
            .position(|p| p.submission == submission)
        else {
            return Vec::new();
        };

        let mut delivered = Vec::with_capacity(position + 1);
        for _ in 0..=position {
            self.pending.pop_front();
            delivered.push(self.push_reply(now));
        }
        delivered
    }

    /// Delivers every reply whose due time is at or before `now`.
    pub fn advance_to(&mut self, now: DateTime<Utc>) -> Vec<Message> {
        let mut delivered = Vec::new();
        while self.pending.front().is_some_and(|p| p.due_at <= now) {
            self.pending.pop_front();
            delivered.push(self.push_reply(now));
        }
        delivered
    }

    fn push_reply(&mut self, now: DateTime<Utc>) -> Message {
        self.push(Role::Assistant, CANNED_REPLY.to_string(), now)
    }

    fn push(&mut self, role: Role, content: String, now: DateTime<Utc>) -> Message {
        let message = Message {
            id: MessageId(self.next_id),
            content,
            role,
            timestamp: now,
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }
}
