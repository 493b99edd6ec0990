//! crates/finmate_core/src/views/chat.rs
//!
//! The chat page: renders the conversation and owns the input buffer.

use crate::conversation::{Conversation, PendingReply};
use crate::domain::{MessageId, Role};
use chrono::{DateTime, Utc};

/// Horizontal placement of a bubble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    /// Left. Used for assistant turns.
    Start,
    /// Right. Used for user turns.
    End,
}

impl From<Role> for Alignment {
    fn from(role: Role) -> Self {
        match role {
            Role::User => Alignment::End,
            Role::Assistant => Alignment::Start,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatBubble {
    pub id: MessageId,
    pub content: String,
    pub role: Role,
    pub alignment: Alignment,
}

/// Holds the input buffer and forwards submissions to the conversation.
#[derive(Debug, Clone, Default)]
pub struct ChatView {
    conversation: Conversation,
    input: String,
}

impl ChatView {
    pub fn new(conversation: Conversation) -> Self {
        Self {
            conversation,
            input: String::new(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Submits the buffer.
    ///
    /// A blank buffer is left untouched and nothing is appended. Otherwise the
    /// user turn is appended, the buffer cleared and the scheduled reply returned.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Option<PendingReply> {
        let reply = self.conversation.submit(&self.input, now)?;
        self.input.clear();
        Some(reply)
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn conversation_mut(&mut self) -> &mut Conversation {
        &mut self.conversation
    }

    /// One bubble per turn, top to bottom.
    pub fn bubbles(&self) -> Vec<ChatBubble> {
        self.conversation
            .messages()
            .iter()
            .map(|m| ChatBubble {
                id: m.id,
                content: m.content.clone(),
                role: m.role,
                alignment: m.role.into(),
            })
            .collect()
    }
}
