//! Artifact writing helpers for resumekit

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Writes text to a file, creating parent directories as needed.
///
/// Writes are not atomic; an interrupted build can leave a truncated
/// artifact, which the next build overwrites.
///
/// # Errors
///
/// Returns error if directory creation or the write fails
pub fn write_text(path: impl AsRef<Path>, text: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}

/// Writes a value as pretty printed JSON with two space indentation.
///
/// # Errors
///
/// Returns error if serialization or the write fails
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON artifact")?;
    write_text(path, &json)
}

/// Counts whitespace separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
