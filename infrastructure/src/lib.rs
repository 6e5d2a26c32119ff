//! Infrastructure layer for veribot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, DEFAULT_BACKEND_URL, FileBackendConfig, FileConfig,
    FileOutputConfig, FileOutputFormat, FileReplConfig, Severity,
};
pub use http::{HttpVerificationGateway, protocol::VERIFY_PATH};
