//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod backend;
mod output;
mod repl;

pub use backend::{DEFAULT_BACKEND_URL, FileBackendConfig};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The configuration cannot work at all.
    Error,
    /// The configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    /// Dotted path of the offending field, e.g. `backend.url`
    pub field: String,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Verification backend settings
    pub backend: FileBackendConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let url = self.backend.url.trim();
        if url.is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Error,
                field: "backend.url".to_string(),
                message: "backend.url is empty; set it to the verification server address"
                    .to_string(),
            });
        } else if !(url.starts_with("http://") || url.starts_with("https://")) {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: "backend.url".to_string(),
                message: format!(
                    "backend.url '{}' has no http:// or https:// scheme; requests will likely fail",
                    url
                ),
            });
        }

        if let Some(path) = &self.repl.history_file
            && path.trim().is_empty()
        {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: "repl.history_file".to_string(),
                message: "repl.history_file is empty; history will not be saved".to_string(),
            });
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veribot_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[backend]
url = "https://veribot.example.com"

[output]
format = "json"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/veribot/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.url, "https://veribot.example.com");
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.repl.history_file.as_deref(),
            Some("~/.local/share/veribot/history.txt")
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[output]
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        // Defaults should apply
        assert_eq!(config.backend.url, DEFAULT_BACKEND_URL);
        assert!(config.output.format.is_none());
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_empty_url() {
        let mut config = FileConfig::default();
        config.backend.url = "  ".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].field, "backend.url");
    }

    #[test]
    fn test_validate_missing_scheme() {
        let mut config = FileConfig::default();
        config.backend.url = "veribot.example.com".to_string();

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
    }

    #[test]
    fn test_validate_blank_history_file() {
        let mut config = FileConfig::default();
        config.repl.history_file = Some(String::new());

        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "repl.history_file");
    }
}
