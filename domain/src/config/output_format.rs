//! Output format value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How bot replies are printed
///
/// Deserialization goes through [`FromStr`], so config files and
/// `VERIBOT_OUTPUT__FORMAT` accept any casing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputFormat {
    /// Labeled report sections (default)
    #[default]
    Sections,
    /// Reply text exactly as received
    Raw,
    /// JSON with the parsed sections
    Json,
}

impl FromStr for OutputFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sections" => Ok(Self::Sections),
            "raw" => Ok(Self::Raw),
            "json" => Ok(Self::Json),
            other => Err(DomainError::InvalidOutputFormat(other.to_string())),
        }
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sections() {
        assert_eq!(OutputFormat::default(), OutputFormat::Sections);
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&OutputFormat::Raw).unwrap();
        assert_eq!(json, "\"raw\"");
    }

    #[test]
    fn test_deserialize_lowercase() {
        let format: OutputFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_deserialize_any_case() {
        let format: OutputFormat = serde_json::from_str("\"Raw\"").unwrap();
        assert_eq!(format, OutputFormat::Raw);
    }

    #[test]
    fn test_deserialize_unknown_reports_format() {
        let err = serde_json::from_str::<OutputFormat>("\"xml\"").unwrap_err();
        assert!(err.to_string().contains("Invalid output format: xml"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
