//! Truthfulness level classification
//!
//! The backend reports truthfulness as a percentage at the start of the
//! `TRUTHFULNESS:` section, e.g. `85% - Moderate (60-89%)`.

use serde::{Deserialize, Serialize};

/// Qualitative truthfulness bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruthfulnessLevel {
    /// 90-100%
    High,
    /// 60-89%
    Moderate,
    /// 30-59%
    Doubtful,
    /// 0-29%
    Low,
}

impl TruthfulnessLevel {
    /// Classify a percentage. Values above 100 count as 100.
    pub fn from_percentage(percentage: u8) -> Self {
        match percentage.min(100) {
            90.. => Self::High,
            60..=89 => Self::Moderate,
            30..=59 => Self::Doubtful,
            _ => Self::Low,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::High => "High (90-100%)",
            Self::Moderate => "Moderate (60-89%)",
            Self::Doubtful => "Doubtful (30-59%)",
            Self::Low => "Low (0-29%)",
        }
    }
}

impl std::fmt::Display for TruthfulnessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Parse a leading percentage such as `85%` or `85 %`.
///
/// Returns `None` when the content does not start with digits followed by
/// a percent sign. Values above 100 are clamped.
pub fn parse_percentage(content: &str) -> Option<u8> {
    let content = content.trim_start();
    let digits_end = content
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(content.len());
    if digits_end == 0 {
        return None;
    }

    if !content[digits_end..].trim_start().starts_with('%') {
        return None;
    }

    // Long digit runs overflow u32; treat them as "more than 100".
    let value = content[..digits_end].parse::<u32>().unwrap_or(u32::MAX);
    Some(value.min(100) as u8)
}
