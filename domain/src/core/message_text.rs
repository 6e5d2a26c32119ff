//! Outgoing message text value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// Text the user wants verified (Value Object)
///
/// Always trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageText {
    content: String,
}

impl MessageText {
    /// Trim the input, rejecting blank text
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let content = raw.trim();
        if content.is_empty() {
            return Err(DomainError::EmptyMessage);
        }
        Ok(Self {
            content: content.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for MessageText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let text = MessageText::parse("  Did it rain in Lisbon?\n").unwrap();
        assert_eq!(text.as_str(), "Did it rain in Lisbon?");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(MessageText::parse(""), Err(DomainError::EmptyMessage));
        assert_eq!(MessageText::parse(" \t\n"), Err(DomainError::EmptyMessage));
    }

    #[test]
    fn test_display() {
        let text = MessageText::parse(" claim ").unwrap();
        assert_eq!(text.to_string(), "claim");
    }
}
