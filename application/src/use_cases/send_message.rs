//! Send Message use case.
//!
//! One round trip of the chat: record the user's message, ask the backend,
//! record the bot's reply. Failures never escape; they become bot messages.

use crate::ports::progress::ProgressNotifier;
use crate::ports::verification_gateway::{GatewayError, VerificationGateway};
use std::sync::Arc;
use tracing::{debug, info, warn};
use veribot_domain::util::preview;
use veribot_domain::{ChatMessage, MessageLog, MessageText};

/// Result of a completed send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageOutput {
    /// The bot message that was appended to the log
    pub reply: ChatMessage,
    /// `false` when the reply is an error notice rather than a backend answer
    pub success: bool,
}

/// Use case for sending one message to the verification backend
pub struct SendMessageUseCase {
    gateway: Arc<dyn VerificationGateway>,
}

impl Clone for SendMessageUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
        }
    }
}

impl SendMessageUseCase {
    pub fn new(gateway: Arc<dyn VerificationGateway>) -> Self {
        Self { gateway }
    }

    /// Send `raw_text` and append both sides of the exchange to `log`.
    ///
    /// Blank input is ignored: nothing is appended, nothing is sent, and
    /// `None` is returned.
    pub async fn execute(
        &self,
        log: &mut MessageLog,
        raw_text: &str,
        progress: &dyn ProgressNotifier,
    ) -> Option<SendMessageOutput> {
        let text = match MessageText::parse(raw_text) {
            Ok(text) => text,
            Err(_) => {
                debug!("Ignoring blank message");
                return None;
            }
        };

        info!("Sending message: {}", preview(text.as_str(), 100));
        log.push(ChatMessage::user(text.as_str()));

        progress.on_request_start();
        let result = self.gateway.verify(text.as_str()).await;
        progress.on_request_complete(result.is_ok());

        let output = match result {
            Ok(reply) => {
                debug!("Received reply ({} bytes)", reply.len());
                SendMessageOutput {
                    reply: ChatMessage::bot(reply),
                    success: true,
                }
            }
            Err(e) => {
                warn!("Verification request failed: {}", e);
                SendMessageOutput {
                    reply: ChatMessage::bot(error_message(&e)),
                    success: false,
                }
            }
        };

        log.push(output.reply.clone());
        Some(output)
    }
}

/// Text of the bot message shown for a failed request
pub fn error_message(error: &GatewayError) -> String {
    if error.is_invalid_response() {
        format!("Error: {}", error)
    } else {
        format!("Error sending message: {}", error)
    }
}
