//! Backend configuration from TOML (`[backend]` section)

use serde::{Deserialize, Serialize};

/// Default backend location: a locally running VeriBot server
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Raw backend configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Base URL of the verification backend (without `/api/veribot`)
    pub url: String,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BACKEND_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::file_config::FileConfig;

    #[test]
    fn test_backend_url_deserialize() {
        let toml_str = r#"
[backend]
url = "https://veribot.example.com"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.url, "https://veribot.example.com");
    }
}
