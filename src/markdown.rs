//! Markdown conversion and title extraction for the resume source.
//!
//! Conversion uses comrak with a fixed resume extension set (tables,
//! footnotes, description lists, fenced code, heading anchors).

mod renderer;
mod title;

pub use renderer::MarkdownRenderer;
pub use title::{DEFAULT_TITLE, extract_title};
