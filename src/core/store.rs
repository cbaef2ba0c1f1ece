use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use super::clock::{Clock, SystemClock};
use super::config::{AppConfig, FormatConfig};
use super::feedback::FeedbackLedger;
use super::message::{ChatMessage, MessageDraft};
use super::session::ChatSession;
use super::timefmt;

/// Title given to a session at creation, before any message arrives.
pub const TITLE_PLACEHOLDER: &str = "New conversation";

/// Title for sessions whose first message is a button menu.
pub const TITLE_BUTTON_FALLBACK: &str = "Conversation";

/// Characters of the first text message kept in a derived title.
const TITLE_LEN: usize = 20;

const TITLE_ELLIPSIS: char = '…';

/// One calendar-date bucket of the session history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionGroup<'a> {
    pub date: String,
    pub sessions: Vec<&'a ChatSession>,
}

/// Owns all session and feedback state. Single source of truth for the
/// presentation layer; nothing outside mutates the data it hands out.
///
/// All operations are synchronous and run on one logical thread of control.
/// Embedders that fan out across UI surfaces wrap it in [`SharedStore`].
pub struct ConversationStore {
    sessions: Vec<ChatSession>,
    active_session_id: Option<i64>,
    feedback: FeedbackLedger,
    is_loading: bool,
    is_waiting_for_response: bool,
    show_sidebar: bool,
    formats: FormatConfig,
    clock: Arc<dyn Clock>,
    last_id: i64,
}

impl ConversationStore {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &AppConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            sessions: Vec::new(),
            active_session_id: None,
            feedback: FeedbackLedger::default(),
            is_loading: false,
            is_waiting_for_response: false,
            show_sidebar: config.show_sidebar,
            formats: config.formats.clone(),
            clock,
            last_id: 0,
        }
    }

    /// Timestamp-derived id with a monotonic tie-break: ids stay unique and
    /// strictly increasing even when allocations outpace clock resolution.
    fn alloc_id(&mut self, now: DateTime<Utc>) -> i64 {
        self.last_id = now.timestamp_millis().max(self.last_id + 1);
        self.last_id
    }

    /// Creates an empty session, puts it at the front of the history, and
    /// makes it the active session.
    pub fn create_session(&mut self) -> &ChatSession {
        let now = self.clock.now();
        let id = self.alloc_id(now);
        let session = ChatSession {
            id,
            date: timefmt::format_date(&self.formats, now),
            title: TITLE_PLACEHOLDER.to_string(),
            messages: Vec::new(),
            last_message_time: timefmt::format_time(&self.formats, now),
        };
        debug!(session_id = id, "created session");
        self.sessions.insert(0, session);
        self.active_session_id = Some(id);
        &self.sessions[0]
    }

    /// Sets the active session unconditionally. An id with no matching
    /// session leaves [`current_session`](Self::current_session) answering
    /// `None` rather than erroring here.
    pub fn select_session(&mut self, id: i64) {
        self.active_session_id = Some(id);
    }

    /// Stamps the draft with an id and time, appends it, and keeps the
    /// session's display fields in step. Appending to an unknown session is
    /// a silent no-op: the call returns `None` and changes nothing.
    pub fn append_message(
        &mut self,
        session_id: i64,
        draft: MessageDraft,
    ) -> Option<&ChatMessage> {
        let Some(idx) = self.sessions.iter().position(|s| s.id == session_id) else {
            warn!(session_id, "append to unknown session ignored");
            return None;
        };

        let now = self.clock.now();
        let id = self.alloc_id(now);
        let time = timefmt::format_time(&self.formats, now);

        let message = match draft {
            MessageDraft::Text {
                role,
                content,
                is_new_message,
            } => ChatMessage::Text {
                id,
                role,
                time: time.clone(),
                content,
                is_new_message,
            },
            MessageDraft::Button {
                role,
                content,
                buttons,
            } => ChatMessage::Button {
                id,
                role,
                time: time.clone(),
                content,
                buttons,
            },
        };

        let session = &mut self.sessions[idx];
        session.messages.push(message);
        session.last_message_time = time;
        if session.messages.len() == 1 {
            session.title = match &session.messages[0] {
                ChatMessage::Text { content, .. } => derived_title(content),
                ChatMessage::Button { .. } => TITLE_BUTTON_FALLBACK.to_string(),
            };
        }
        debug!(session_id, message_id = id, "appended message");
        session.messages.last()
    }

    /// Unsets a text message's entrance-effect hint once the presentation
    /// layer has consumed it. No-op on unknown ids or button messages.
    pub fn clear_new_message_flag(&mut self, session_id: i64, message_id: i64) {
        let Some(session) = self.sessions.iter_mut().find(|s| s.id == session_id) else {
            return;
        };
        if let Some(ChatMessage::Text { is_new_message, .. }) = session
            .messages
            .iter_mut()
            .find(|m| m.id() == message_id)
        {
            *is_new_message = None;
        }
    }

    /// Records a vote regardless of whether the id refers to a message the
    /// store has ever seen.
    pub fn set_feedback(&mut self, message_id: i64, is_helpful: bool) {
        self.feedback.set(message_id, is_helpful);
    }

    /// Removes a vote; the id reads back as "no feedback" afterwards.
    pub fn clear_feedback(&mut self, message_id: i64) {
        self.feedback.clear(message_id);
    }

    /// Whether any vote has been recorded for this message.
    pub fn has_feedback(&self, message_id: i64) -> bool {
        self.feedback.has(message_id)
    }

    /// The recorded vote, or `None` when no feedback exists.
    pub fn feedback(&self, message_id: i64) -> Option<bool> {
        self.feedback.get(message_id)
    }

    /// Sessions in most-recently-created-first order.
    pub fn sessions(&self) -> &[ChatSession] {
        &self.sessions
    }

    pub fn active_session_id(&self) -> Option<i64> {
        self.active_session_id
    }

    pub fn current_session(&self) -> Option<&ChatSession> {
        let id = self.active_session_id?;
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Partitions the history into calendar-date buckets keyed by each
    /// session's id-as-timestamp. Bucket order and member order both follow
    /// the session list front-to-back, so every ordering here is the
    /// most-recent-first ordering of [`sessions`](Self::sessions).
    pub fn grouped_sessions(&self) -> Vec<SessionGroup<'_>> {
        let mut groups: Vec<SessionGroup<'_>> = Vec::new();
        for session in &self.sessions {
            let instant = DateTime::from_timestamp_millis(session.id).unwrap_or_default();
            let date = timefmt::format_group_date(&self.formats, instant);
            match groups.iter_mut().find(|g| g.date == date) {
                Some(group) => group.sessions.push(session),
                None => groups.push(SessionGroup {
                    date,
                    sessions: vec![session],
                }),
            }
        }
        groups
    }

    pub fn format_time(&self, instant: DateTime<Utc>) -> String {
        timefmt::format_time(&self.formats, instant)
    }

    pub fn format_date(&self, instant: DateTime<Utc>) -> String {
        timefmt::format_date(&self.formats, instant)
    }

    pub fn set_is_loading(&mut self, value: bool) {
        self.is_loading = value;
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_is_waiting_for_response(&mut self, value: bool) {
        self.is_waiting_for_response = value;
    }

    pub fn is_waiting_for_response(&self) -> bool {
        self.is_waiting_for_response
    }

    pub fn toggle_sidebar(&mut self) {
        self.show_sidebar = !self.show_sidebar;
    }

    pub fn show_sidebar(&self) -> bool {
        self.show_sidebar
    }
}

fn derived_title(content: &str) -> String {
    let mut title: String = content.chars().take(TITLE_LEN).collect();
    title.push(TITLE_ELLIPSIS);
    title
}

/// Clone-able handle that serializes access to one store.
///
/// The store itself is single-actor; this wrapper is the explicit lock for
/// embedders that multiplex several UI surfaces over the same state.
#[derive(Clone)]
pub struct SharedStore {
    inner: Arc<RwLock<ConversationStore>>,
}

impl SharedStore {
    pub fn new(store: ConversationStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&ConversationStore) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut ConversationStore) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }
}
