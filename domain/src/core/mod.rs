//! Core domain concepts shared across the crate.
//!
//! - [`message_text::MessageText`] — validated text to send for verification
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod message_text;
