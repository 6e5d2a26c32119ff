//! Interactive chat module
//!
//! Provides a line-editor based interactive chat interface for VeriBot.

mod repl;

pub use repl::{ChatRepl, CommandResult};
