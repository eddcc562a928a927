//! Markdown to HTML fragment conversion.

use anyhow::{Context, Result};
use comrak::Options;
use std::path::Path;

/// Renders resume markdown to an HTML fragment.
///
/// The extension set is fixed: tables, footnotes, description lists,
/// fenced code blocks and heading anchors for a table of contents. Raw
/// HTML in the source passes through untouched, since the resume author
/// is the only content source.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates renderer with the resume extension set.
    ///
    /// Configures:
    /// - Tables, footnotes and description lists
    /// - Heading ids without prefix, so `# Jane Doe` anchors at `#jane-doe`
    /// - Raw HTML passthrough
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.table = true;
        options.extension.footnotes = true;
        options.extension.description_lists = true;
        options.extension.header_ids = Some(String::new());

        // Resume content is authored locally
        options.render.unsafe_ = true;

        Self { options }
    }

    /// Renders markdown content to an HTML fragment.
    ///
    /// Conversion never fails: malformed markdown degrades to paragraphs
    /// and literal text following CommonMark rules.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// HTML fragment without surrounding page structure
    pub fn render(&self, content: &str) -> String {
        comrak::markdown_to_html(content, &self.options)
    }

    /// Renders markdown file at given path.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read
    pub fn render_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read markdown file: {}", path.display()))?;
        Ok(self.render(&content))
    }
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}
