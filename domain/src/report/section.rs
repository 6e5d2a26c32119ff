//! Response section value objects

use super::truthfulness::{TruthfulnessLevel, parse_percentage};
use serde::{Deserialize, Serialize};

/// Kind of a labeled section inside a verification report
///
/// The declaration order is the display order: summary, truthfulness,
/// justification, sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Summary,
    Truthfulness,
    Justification,
    Sources,
}

impl SectionKind {
    /// All section kinds in display order
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Summary,
        SectionKind::Truthfulness,
        SectionKind::Justification,
        SectionKind::Sources,
    ];

    /// Literal marker that opens this section in the backend's reply
    pub fn marker(&self) -> &'static str {
        match self {
            SectionKind::Summary => "VERIFICATION RESULTS SUMMARY:",
            SectionKind::Truthfulness => "TRUTHFULNESS:",
            SectionKind::Justification => "JUSTIFICATION:",
            SectionKind::Sources => "SOURCES USED:",
        }
    }

    /// Human-readable label shown in front of the section content
    pub fn label(&self) -> &'static str {
        match self {
            SectionKind::Summary => "Summary:",
            SectionKind::Truthfulness => "Truthfulness:",
            SectionKind::Justification => "Justification:",
            SectionKind::Sources => "Sources Used:",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SectionKind::Summary => "summary",
            SectionKind::Truthfulness => "truthfulness",
            SectionKind::Justification => "justification",
            SectionKind::Sources => "sources",
        };
        write!(f, "{}", name)
    }
}

/// One labeled section of a structured report (Value Object)
///
/// Derived from a bot reply on demand; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSection {
    pub kind: SectionKind,
    pub label: String,
    pub content: String,
}

impl ResponseSection {
    pub fn new(kind: SectionKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            content: content.into(),
        }
    }

    /// Truthfulness level, if this is the truthfulness section and its
    /// content starts with a percentage
    pub fn truthfulness_level(&self) -> Option<TruthfulnessLevel> {
        if self.kind != SectionKind::Truthfulness {
            return None;
        }
        parse_percentage(&self.content).map(TruthfulnessLevel::from_percentage)
    }

    /// Individual source entries, if this is the sources section
    pub fn source_entries(&self) -> Vec<String> {
        if self.kind != SectionKind::Sources {
            return Vec::new();
        }
        split_sources(&self.content)
    }
}

/// Split the content of a sources section into individual entries.
///
/// One entry per non-blank line, with list bullets (`-`, `*`, `•`) and
/// ordinal prefixes (`1.`, `2)`) removed.
pub fn split_sources(content: &str) -> Vec<String> {
    content
        .lines()
        .map(strip_list_prefix)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_list_prefix(line: &str) -> &str {
    let line = line.trim();

    if let Some(rest) = line
        .strip_prefix('-')
        .or_else(|| line.strip_prefix('*'))
        .or_else(|| line.strip_prefix('•'))
    {
        return rest.trim_start();
    }

    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0
        && let Some(rest) = line[digits..]
            .strip_prefix('.')
            .or_else(|| line[digits..].strip_prefix(')'))
    {
        return rest.trim_start();
    }

    line
}
