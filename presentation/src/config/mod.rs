//! Presentation-level configuration
//!
//! Resolved settings for output formatting and REPL behavior.

use std::path::PathBuf;
use veribot_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// How bot replies are printed
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show the spinner while waiting for the backend
    pub show_progress: bool,
    /// Path to history file; no history is kept when `None`
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}
