//! Domain layer for veribot
//!
//! This crate contains the chat model and the verification report renderer.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Structured report
//!
//! The verification backend answers either with plain text or with a report
//! made of four marker-delimited sections:
//!
//! - `VERIFICATION RESULTS SUMMARY:` → **Summary**
//! - `TRUTHFULNESS:` → **Truthfulness**
//! - `JUSTIFICATION:` → **Justification**
//! - `SOURCES USED:` → **Sources Used**
//!
//! [`render_reply`] turns a reply into a [`RenderedReply`].

pub mod chat;
pub mod config;
pub mod core;
pub mod report;
pub mod util;

// Re-export commonly used types
pub use chat::{ChatMessage, MessageLog, Sender};
pub use config::OutputFormat;
pub use core::{error::DomainError, message_text::MessageText};
pub use report::{
    RenderedReply, ResponseSection, SectionKind, TruthfulnessLevel, is_structured_report,
    parse_percentage, parse_sections, render_reply, split_sources,
};
