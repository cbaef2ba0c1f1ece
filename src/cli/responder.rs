use crate::core::message::{ButtonAction, MessageButton, MessageDraft, MessageRole};

/// Produces the assistant's reply to a user line.
///
/// Stands in for the backend request dispatcher: a real deployment sends the
/// line to a remote service and feeds the response back through
/// `append_message` as an assistant draft. The REPL only depends on this
/// trait, so transport stays out of the store entirely.
pub trait Responder {
    fn respond(&mut self, input: &str) -> MessageDraft;
}

/// Offline responder with canned replies.
pub struct CannedResponder;

impl Responder for CannedResponder {
    fn respond(&mut self, input: &str) -> MessageDraft {
        let input = input.trim();
        if input.eq_ignore_ascii_case("help") {
            return MessageDraft::Button {
                role: MessageRole::Assistant,
                content: "What would you like to do?".into(),
                buttons: vec![
                    MessageButton {
                        text: "Open settings".into(),
                        action: ButtonAction::Dialog,
                        payload: None,
                    },
                    MessageButton {
                        text: "Run diagnostics".into(),
                        action: ButtonAction::Process,
                        payload: Some("diagnostics".into()),
                    },
                ],
            };
        }
        MessageDraft::Text {
            role: MessageRole::Assistant,
            content: format!("You said: {input}"),
            is_new_message: Some(true),
        }
    }
}
