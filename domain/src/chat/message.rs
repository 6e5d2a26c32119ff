//! Chat message entity

use crate::report::{RenderedReply, render_reply};
use serde::{Deserialize, Serialize};

/// Who sent a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Bot => write!(f, "bot"),
        }
    }
}

/// A message in the visible conversation
///
/// Immutable once created: fields are private and there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    sender: Sender,
    text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Bot,
            text: text.into(),
        }
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display form of this message.
    ///
    /// User messages are always shown verbatim; only bot replies can be
    /// structured reports.
    pub fn render(&self) -> RenderedReply {
        match self.sender {
            Sender::User => RenderedReply::Plain(self.text.clone()),
            Sender::Bot => render_reply(&self.text),
        }
    }
}
