//! Verification gateway port
//!
//! Defines the interface for talking to the remote verification backend.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while asking the backend for a verification
///
/// `Display` yields the message shown to the user after
/// `"Error sending message: "` for transport-level failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The backend answered with a non-2xx status
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The request never completed (DNS, connection refused, TLS, ...)
    #[error("{0}")]
    Transport(String),

    /// The response body was not valid JSON
    #[error("{0}")]
    Decode(String),

    /// Valid JSON, but not `{ "type": "message", "text": "..." }`
    #[error("Invalid response format from server.")]
    InvalidResponse,
}

impl GatewayError {
    /// Whether the failure is about the shape of an otherwise received response
    pub fn is_invalid_response(&self) -> bool {
        matches!(self, GatewayError::InvalidResponse)
    }
}

/// Gateway to the verification backend
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait VerificationGateway: Send + Sync {
    /// Send user text and return the bot's reply text
    async fn verify(&self, text: &str) -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        assert_eq!(GatewayError::Status(500).to_string(), "HTTP error! status: 500");
    }

    #[test]
    fn test_transport_display_is_bare_message() {
        let error = GatewayError::Transport("connection refused".to_string());
        assert_eq!(error.to_string(), "connection refused");
        assert!(!error.is_invalid_response());
    }

    #[test]
    fn test_invalid_response() {
        assert!(GatewayError::InvalidResponse.is_invalid_response());
        assert_eq!(
            GatewayError::InvalidResponse.to_string(),
            "Invalid response format from server."
        );
    }
}
