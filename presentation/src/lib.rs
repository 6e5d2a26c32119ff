//! Presentation layer for veribot
//!
//! This crate contains the CLI definition, the console formatter for
//! verification reports, the progress spinner and the interactive chat.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, CommandResult};
pub use cli::commands::{Cli, CliOutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::Spinner;
