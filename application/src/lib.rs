//! Application layer for veribot
//!
//! This crate contains the send-message use case and the ports it talks
//! through. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    progress::{NoProgress, ProgressNotifier},
    verification_gateway::{GatewayError, VerificationGateway},
};
pub use use_cases::send_message::{SendMessageOutput, SendMessageUseCase, error_message};
