//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Message cannot be empty")]
    EmptyMessage,

    #[error("Invalid output format: {0} (expected sections, raw or json)")]
    InvalidOutputFormat(String),
}
