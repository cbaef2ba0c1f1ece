use serde::{Deserialize, Serialize};

use super::message::ChatMessage;

/// A single conversation thread: an append-only message log plus the
/// display fields the history sidebar renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    /// Creation-instant id in epoch milliseconds; doubles as the sort and
    /// grouping key. Unique and immutable for the session's lifetime.
    pub id: i64,
    /// Display rendering of the creation instant, fixed at creation.
    pub date: String,
    /// Placeholder until the first message arrives, then derived exactly once.
    pub title: String,
    pub messages: Vec<ChatMessage>,
    /// Display time of the most recent message.
    pub last_message_time: String,
}

impl ChatSession {
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}
