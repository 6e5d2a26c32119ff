//! Console output formatter for chat messages

use colored::{ColoredString, Colorize};
use serde::Serialize;
use veribot_domain::{
    ChatMessage, OutputFormat, RenderedReply, ResponseSection, SectionKind, Sender,
    TruthfulnessLevel,
};

/// JSON shape of a printed message
#[derive(Serialize)]
struct JsonMessage<'a> {
    sender: Sender,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sections: Option<&'a [ResponseSection]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    truthfulness_level: Option<TruthfulnessLevel>,
}

/// Formats chat messages for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a message in the requested format
    pub fn format(message: &ChatMessage, format: OutputFormat) -> String {
        match format {
            OutputFormat::Sections => Self::format_sections(message),
            OutputFormat::Raw => Self::format_raw(message),
            OutputFormat::Json => Self::format_json(message),
        }
    }

    /// Format an error notice produced in place of a reply
    pub fn format_error(message: &ChatMessage, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => Self::format_json(message),
            _ => message.text().red().to_string(),
        }
    }

    /// Labeled sections for a report, verbatim text otherwise.
    ///
    /// A report in which no section could be recognized falls back to the
    /// raw text so that nothing is silently swallowed.
    pub fn format_sections(message: &ChatMessage) -> String {
        match message.render() {
            RenderedReply::Plain(text) => text,
            RenderedReply::Report(sections) if sections.is_empty() => message.text().to_string(),
            RenderedReply::Report(sections) => sections
                .iter()
                .map(Self::format_section)
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }

    /// Text exactly as received
    pub fn format_raw(message: &ChatMessage) -> String {
        message.text().to_string()
    }

    /// Format as JSON
    pub fn format_json(message: &ChatMessage) -> String {
        let reply = message.render();
        let json = JsonMessage {
            sender: message.sender(),
            text: message.text(),
            sections: reply.is_report().then(|| reply.sections()),
            truthfulness_level: reply
                .section(SectionKind::Truthfulness)
                .and_then(ResponseSection::truthfulness_level),
        };
        serde_json::to_string_pretty(&json).unwrap_or_else(|_| "{}".to_string())
    }

    /// Conversation transcript, user lines prefixed with `>`
    pub fn format_history<'a>(messages: impl IntoIterator<Item = &'a ChatMessage>) -> String {
        messages
            .into_iter()
            .map(|message| match message.sender() {
                Sender::User => format!("{} {}", ">".dimmed(), message.text().bold()),
                Sender::Bot => Self::format_sections(message),
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn format_section(section: &ResponseSection) -> String {
        let label = Self::section_label(section);

        if section.kind == SectionKind::Sources {
            let entries = section.source_entries();
            if entries.len() > 1 {
                let list = entries
                    .iter()
                    .map(|entry| format!("  - {}", entry))
                    .collect::<Vec<_>>()
                    .join("\n");
                return format!("{}\n{}", label, list);
            }
        }

        if section.content.contains('\n') {
            format!("{}\n{}", label, Self::indent(&section.content, "  "))
        } else if section.content.is_empty() {
            label.to_string()
        } else {
            format!("{} {}", label, section.content)
        }
    }

    /// Bold label, coloured by truthfulness level when there is one
    fn section_label(section: &ResponseSection) -> ColoredString {
        let label = section.label.as_str().bold();
        match section.truthfulness_level() {
            Some(TruthfulnessLevel::High) => label.green(),
            Some(TruthfulnessLevel::Moderate) => label.yellow(),
            Some(TruthfulnessLevel::Doubtful) => label.magenta(),
            Some(TruthfulnessLevel::Low) => label.red(),
            None => label.cyan(),
        }
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line.trim_start()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
