//! Page title detection.

/// Title used when the resume has no top level heading.
pub const DEFAULT_TITLE: &str = "Resume";

/// Returns the text of the first `# ` heading line.
///
/// Only lines starting exactly with `"# "` count, so `##` headings and
/// indented lines are ignored. The prefix is stripped and the remainder
/// trimmed. Falls back to [`DEFAULT_TITLE`] when no line matches.
pub fn extract_title(markdown: &str) -> String {
    markdown
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}
