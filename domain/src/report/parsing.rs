//! Verification report parsing.
//!
//! Pure text handling, no I/O. A bot reply is a *structured report* when it
//! contains the `VERIFICATION RESULTS SUMMARY:` marker anywhere; otherwise it
//! is displayed verbatim.
//!
//! A structured report is cut into segments at every line that starts with
//! one of the four section markers. Markers in the middle of a line are part
//! of the surrounding text. Sections are always returned in
//! [`SectionKind::ALL`] order, whatever order the backend used, and a
//! missing marker simply drops its section.
//!
//! ```
//! use veribot_domain::report::parsing::parse_sections;
//!
//! let sections = parse_sections(
//!     "VERIFICATION RESULTS SUMMARY: ok\nTRUTHFULNESS: true\nJUSTIFICATION: because\nSOURCES USED: none",
//! );
//! let pairs: Vec<_> = sections
//!     .iter()
//!     .map(|s| (s.label.as_str(), s.content.as_str()))
//!     .collect();
//! assert_eq!(
//!     pairs,
//!     vec![
//!         ("Summary:", "ok"),
//!         ("Truthfulness:", "true"),
//!         ("Justification:", "because"),
//!         ("Sources Used:", "none"),
//!     ]
//! );
//! ```

use super::section::{ResponseSection, SectionKind};
use serde::{Deserialize, Serialize};

/// How a reply should be displayed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum RenderedReply {
    /// A single display unit holding the raw text verbatim
    Plain(String),
    /// Labeled sections of a structured report, in display order
    Report(Vec<ResponseSection>),
}

impl RenderedReply {
    pub fn is_report(&self) -> bool {
        matches!(self, RenderedReply::Report(_))
    }

    /// Sections of a report; empty for plain text
    pub fn sections(&self) -> &[ResponseSection] {
        match self {
            RenderedReply::Plain(_) => &[],
            RenderedReply::Report(sections) => sections,
        }
    }

    /// Find a section by kind
    pub fn section(&self, kind: SectionKind) -> Option<&ResponseSection> {
        self.sections().iter().find(|s| s.kind == kind)
    }
}

/// Whether the text is a structured verification report
pub fn is_structured_report(text: &str) -> bool {
    text.contains(SectionKind::Summary.marker())
}

/// Turn a raw bot reply into its display form
pub fn render_reply(text: &str) -> RenderedReply {
    if is_structured_report(text) {
        RenderedReply::Report(parse_sections(text))
    } else {
        RenderedReply::Plain(text.to_string())
    }
}

/// Extract the labeled sections of a structured report.
///
/// For each kind the first segment beginning with its marker wins. Content
/// is the remainder of that segment with surrounding whitespace trimmed.
pub fn parse_sections(text: &str) -> Vec<ResponseSection> {
    let segments = split_segments(text);

    SectionKind::ALL
        .iter()
        .filter_map(|kind| {
            segments
                .iter()
                .find_map(|segment| segment.strip_prefix(kind.marker()))
                .map(|rest| ResponseSection::new(*kind, rest.trim()))
        })
        .collect()
}

/// Split before every newline-prefixed marker. The newline itself is
/// dropped; the marker stays at the start of its segment.
fn split_segments(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;

    for (newline, _) in text.match_indices('\n') {
        let next = newline + 1;
        if starts_with_marker(&text[next..]) {
            segments.push(&text[start..newline]);
            start = next;
        }
    }
    segments.push(&text[start..]);

    segments
}

fn starts_with_marker(text: &str) -> bool {
    SectionKind::ALL
        .iter()
        .any(|kind| text.starts_with(kind.marker()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(sections: &[ResponseSection]) -> Vec<(&str, &str)> {
        sections
            .iter()
            .map(|s| (s.label.as_str(), s.content.as_str()))
            .collect()
    }

    #[test]
    fn test_plain_text_is_single_unit() {
        let text = "Hello! Paste a news headline and I will check it.";
        assert_eq!(render_reply(text), RenderedReply::Plain(text.to_string()));
    }

    #[test]
    fn test_plain_text_kept_verbatim() {
        let text = "  TRUTHFULNESS: looks like a report\nbut has no summary  \n";
        assert_eq!(render_reply(text), RenderedReply::Plain(text.to_string()));
    }

    #[test]
    fn test_full_report() {
        let text = "VERIFICATION RESULTS SUMMARY: ok\nTRUTHFULNESS: true\nJUSTIFICATION: because\nSOURCES USED: none";
        let reply = render_reply(text);
        assert!(reply.is_report());
        assert_eq!(
            pairs(reply.sections()),
            vec![
                ("Summary:", "ok"),
                ("Truthfulness:", "true"),
                ("Justification:", "because"),
                ("Sources Used:", "none"),
            ]
        );
    }

    #[test]
    fn test_out_of_order_markers_are_reordered() {
        let text = "SOURCES USED: Reuters\nJUSTIFICATION: matches reports\nVERIFICATION RESULTS SUMMARY: the claim holds\nTRUTHFULNESS: 92%";
        assert_eq!(
            pairs(&parse_sections(text)),
            vec![
                ("Summary:", "the claim holds"),
                ("Truthfulness:", "92%"),
                ("Justification:", "matches reports"),
                ("Sources Used:", "Reuters"),
            ]
        );
    }

    #[test]
    fn test_mid_line_marker_does_not_split() {
        let text = "VERIFICATION RESULTS SUMMARY: the article says TRUTHFULNESS: is rare\nJUSTIFICATION: checked";
        let sections = parse_sections(text);
        assert_eq!(
            pairs(&sections),
            vec![
                ("Summary:", "the article says TRUTHFULNESS: is rare"),
                ("Justification:", "checked"),
            ]
        );
    }

    #[test]
    fn test_missing_sources_yields_three_sections() {
        let text = "VERIFICATION RESULTS SUMMARY: ok\nTRUTHFULNESS: true\nJUSTIFICATION: because";
        let sections = parse_sections(text);
        assert_eq!(sections.len(), 3);
        assert!(sections.iter().all(|s| s.kind != SectionKind::Sources));
    }

    #[test]
    fn test_multiline_content_is_trimmed() {
        let text = "VERIFICATION RESULTS SUMMARY:\n  A long summary\n  over two lines  \n\nTRUTHFULNESS: 40% - Doubtful (30-59%)\n\nJUSTIFICATION:\nNo outlet confirms it.\n\nSOURCES USED:\n- Reuters\n- BBC\n";
        let reply = render_reply(text);
        assert_eq!(
            pairs(reply.sections()),
            vec![
                ("Summary:", "A long summary\n  over two lines"),
                ("Truthfulness:", "40% - Doubtful (30-59%)"),
                ("Justification:", "No outlet confirms it."),
                ("Sources Used:", "- Reuters\n- BBC"),
            ]
        );
    }

    #[test]
    fn test_first_matching_segment_wins() {
        let text = "VERIFICATION RESULTS SUMMARY: first\nTRUTHFULNESS: 80%\nTRUTHFULNESS: 10%";
        let reply = render_reply(text);
        assert_eq!(
            reply.section(SectionKind::Truthfulness).map(|s| s.content.as_str()),
            Some("80%")
        );
    }

    #[test]
    fn test_preamble_before_summary_is_ignored() {
        let text = "Here is what I found:\nVERIFICATION RESULTS SUMMARY: done\nTRUTHFULNESS: 95%";
        assert_eq!(
            pairs(&parse_sections(text)),
            vec![("Summary:", "done"), ("Truthfulness:", "95%")]
        );
    }

    #[test]
    fn test_mid_line_summary_marker_yields_no_summary() {
        // Still a report, but the summary never starts a segment.
        let text = "Result: VERIFICATION RESULTS SUMMARY: hidden\nTRUTHFULNESS: 50%";
        let reply = render_reply(text);
        assert!(reply.is_report());
        assert_eq!(pairs(reply.sections()), vec![("Truthfulness:", "50%")]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "VERIFICATION RESULTS SUMMARY: ok\r\nTRUTHFULNESS: true\r\nSOURCES USED: none\r\n";
        assert_eq!(
            pairs(&parse_sections(text)),
            vec![
                ("Summary:", "ok"),
                ("Truthfulness:", "true"),
                ("Sources Used:", "none"),
            ]
        );
    }

    #[test]
    fn test_empty_section_content() {
        let text = "VERIFICATION RESULTS SUMMARY:\nTRUTHFULNESS:";
        assert_eq!(
            pairs(&parse_sections(text)),
            vec![("Summary:", ""), ("Truthfulness:", "")]
        );
    }

    #[test]
    fn test_plain_reply_has_no_sections() {
        let reply = render_reply("just text");
        assert!(!reply.is_report());
        assert!(reply.sections().is_empty());
        assert!(reply.section(SectionKind::Summary).is_none());
    }
}
