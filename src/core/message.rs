use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

/// What pressing a message button should trigger in the hosting UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonAction {
    /// Open a dialog.
    Dialog,
    /// Kick off a backend process.
    Process,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageButton {
    pub text: String,
    pub action: ButtonAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
}

/// A message in a session log. `id` and `time` are assigned by the store,
/// never by the caller; everything else is copied verbatim from the draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatMessage {
    Text {
        id: i64,
        role: MessageRole,
        time: String,
        content: String,
        /// Entrance-effect hint for the presentation layer. Carried only
        /// when the draft supplied it; never defaulted.
        #[serde(skip_serializing_if = "Option::is_none")]
        is_new_message: Option<bool>,
    },
    Button {
        id: i64,
        role: MessageRole,
        time: String,
        content: String,
        buttons: Vec<MessageButton>,
    },
}

impl ChatMessage {
    pub fn id(&self) -> i64 {
        match self {
            Self::Text { id, .. } | Self::Button { id, .. } => *id,
        }
    }

    pub fn role(&self) -> MessageRole {
        match self {
            Self::Text { role, .. } | Self::Button { role, .. } => *role,
        }
    }

    pub fn time(&self) -> &str {
        match self {
            Self::Text { time, .. } | Self::Button { time, .. } => time,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Text { content, .. } | Self::Button { content, .. } => content,
        }
    }
}

/// Caller-supplied message payload lacking the store-assigned fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageDraft {
    Text {
        role: MessageRole,
        content: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        is_new_message: Option<bool>,
    },
    Button {
        role: MessageRole,
        content: String,
        buttons: Vec<MessageButton>,
    },
}

impl MessageDraft {
    /// A user-role text draft with no entrance hint.
    pub fn user_text(content: impl Into<String>) -> Self {
        Self::Text {
            role: MessageRole::User,
            content: content.into(),
            is_new_message: None,
        }
    }
}
