//! Configuration file loading for veribot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `VERIBOT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./veribot.toml` or `./.veribot.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/veribot/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, DEFAULT_BACKEND_URL, FileBackendConfig, FileConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig, Severity,
};
pub use loader::ConfigLoader;
