use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-message helpfulness votes, keyed by message id.
///
/// The ledger never consults the session graph: votes may arrive for ids the
/// store has never seen, and they outlive whatever they point at. Entries
/// store plain `bool`s, so key presence always implies a value and the
/// presence and value queries cannot disagree; clearing a vote removes the
/// key outright.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackLedger {
    votes: HashMap<i64, bool>,
}

impl FeedbackLedger {
    pub fn set(&mut self, message_id: i64, is_helpful: bool) {
        self.votes.insert(message_id, is_helpful);
    }

    /// Whether any vote has been recorded for this message.
    pub fn has(&self, message_id: i64) -> bool {
        self.votes.contains_key(&message_id)
    }

    /// The recorded vote, or `None` when no feedback exists.
    pub fn get(&self, message_id: i64) -> Option<bool> {
        self.votes.get(&message_id).copied()
    }

    /// Removes a vote, returning what was stored.
    pub fn clear(&mut self, message_id: i64) -> Option<bool> {
        self.votes.remove(&message_id)
    }

    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }
}
