//! Chat conversation model
//!
//! - [`message::ChatMessage`] — one immutable message from the user or the bot
//! - [`log::MessageLog`] — the append-only visible conversation

pub mod log;
pub mod message;

pub use log::MessageLog;
pub use message::{ChatMessage, Sender};
