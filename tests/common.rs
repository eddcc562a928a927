//! Shared test utilities for integration tests.
//!
//! Provides helpers for laying out a resume project in a temporary
//! directory and stub text models for the ATS step.

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use resumekit::{ModelError, SitePaths, TextModel};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Template with both placeholders, mirroring a typical resume page.
pub const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head><title>{{PAGE_TITLE}}</title></head>
<body>
<main>{{CONTENT}}</main>
</body>
</html>
"#;

/// Creates temporary project with `resume.md` and `src/template.html`.
///
/// # Returns
///
/// Temporary directory and the site paths pointing into it, with output
/// under `dist/`
///
/// # Errors
///
/// Returns error if directory creation or file writes fail
pub fn create_project(resume: &str, template: &str) -> Result<(TempDir, SitePaths)> {
    let dir = TempDir::new()?;
    let root = dir.path();

    write_file(root, "resume.md", resume)?;
    write_file(root, "src/template.html", template)?;

    let paths = SitePaths {
        resume: root.join("resume.md"),
        template: root.join("src/template.html"),
        output: root.join("dist"),
    };

    Ok((dir, paths))
}

/// Writes file under `root`, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Model that always answers with fixed text.
pub struct ReplyModel {
    pub reply: String,
    pub calls: AtomicUsize,
}

impl ReplyModel {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextModel for ReplyModel {
    async fn generate(&self, _prompt: &str) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.clone())
    }
}

/// Model whose invocation always fails, as with missing permissions.
pub struct UnavailableModel;

#[async_trait]
impl TextModel for UnavailableModel {
    async fn generate(&self, _prompt: &str) -> Result<String, ModelError> {
        Err(ModelError::Invoke(
            "AccessDeniedException: model access is not enabled".to_string(),
        ))
    }
}
