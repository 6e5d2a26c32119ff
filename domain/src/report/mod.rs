//! Verification report rendering
//!
//! - [`parsing`] — splits a bot reply into labeled sections
//! - [`section`] — section kinds, labels and markers
//! - [`truthfulness`] — qualitative truthfulness levels

pub mod parsing;
pub mod section;
pub mod truthfulness;

pub use parsing::{RenderedReply, is_structured_report, parse_sections, render_reply};
pub use section::{ResponseSection, SectionKind, split_sources};
pub use truthfulness::{TruthfulnessLevel, parse_percentage};
