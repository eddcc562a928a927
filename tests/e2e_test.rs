//! End-to-end tests for the Resumekit binary.

mod common;

use anyhow::Result;
use common::{TEMPLATE, write_file};
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Tests binary run with default paths generates the site.
#[test]
fn test_default_paths_e2e() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    write_file(dir.path(), "resume.md", "# Jane Doe\n\nSkills: Go, SQL")?;
    write_file(dir.path(), "src/template.html", TEMPLATE)?;

    // Act
    let output = Command::new(env!("CARGO_BIN_EXE_resumekit"))
        .arg("--skip-ats")
        .current_dir(dir.path())
        .output()?;

    // Assert
    assert!(
        output.status.success(),
        "Binary should succeed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let html_content = fs::read_to_string(dir.path().join("dist/index.html"))?;
    assert!(html_content.contains("Jane Doe — Resume"));
    assert!(html_content.contains("Skills: Go, SQL"));
    assert!(dir.path().join("dist/test_output.html").exists());
    assert!(dir.path().join("dist/converted.html").exists());
    assert!(!dir.path().join("dist/ats_analysis.json").exists());

    Ok(())
}

/// Tests binary rejects a missing resume before writing output.
#[test]
fn test_missing_resume_e2e() -> Result<()> {
    // Arrange
    let dir = TempDir::new()?;
    write_file(dir.path(), "src/template.html", TEMPLATE)?;

    // Act
    let output = Command::new(env!("CARGO_BIN_EXE_resumekit"))
        .args(["--skip-ats", "-o", "public"])
        .current_dir(dir.path())
        .output()?;

    // Assert
    assert!(!output.status.success(), "Missing resume should fail");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Resume file does not exist"));
    assert!(!dir.path().join("public").exists());

    Ok(())
}
