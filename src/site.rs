//! Resume site build pipeline.

use anyhow::{Context, Result};
use maud::html;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::ats::{AtsAnalysis, AtsAnalyzer, TextModel};
use crate::markdown::{MarkdownRenderer, extract_title};
use crate::template::Template;
use crate::util::write_text;

/// Build verification page written before any conversion.
pub const SMOKE_TEST_FILE: &str = "test_output.html";

/// Converted markdown fragment without page structure.
pub const CONVERTED_FILE: &str = "converted.html";

/// Final rendered page.
pub const INDEX_FILE: &str = "index.html";

/// ATS analysis consumed by deployment recorders.
pub const ATS_ANALYSIS_FILE: &str = "ats_analysis.json";

/// Input and output locations for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePaths {
    pub resume: PathBuf,
    pub template: PathBuf,
    pub output: PathBuf,
}

impl Default for SitePaths {
    fn default() -> Self {
        Self {
            resume: PathBuf::from("resume.md"),
            template: PathBuf::from("src/template.html"),
            output: PathBuf::from("dist"),
        }
    }
}

impl SitePaths {
    /// Returns path of an artifact inside the output directory.
    pub fn artifact(&self, name: &str) -> PathBuf {
        self.output.join(name)
    }
}

/// Outcome of a completed build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Title extracted from the resume heading.
    pub title: String,
    pub index_path: PathBuf,
    /// `None` when ATS analysis was skipped.
    pub analysis: Option<AtsAnalysis>,
}

/// Runs the resume build pipeline.
///
/// Steps run strictly in order and any read or write failure aborts the
/// build. Artifacts written before the failure are left in place.
pub struct SiteBuilder {
    paths: SitePaths,
    renderer: MarkdownRenderer<'static>,
}

impl SiteBuilder {
    pub fn new(paths: SitePaths) -> Self {
        Self {
            paths,
            renderer: MarkdownRenderer::new(),
        }
    }

    pub fn paths(&self) -> &SitePaths {
        &self.paths
    }

    /// Builds the site, then runs ATS analysis when a model is given.
    ///
    /// # Arguments
    ///
    /// * `model`: Text model for ATS analysis, or `None` to skip it
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The resume or template cannot be read
    /// - Any artifact cannot be written
    ///
    /// Model failures are not errors; they produce a fallback analysis.
    pub async fn build(&self, model: Option<&dyn TextModel>) -> Result<BuildReport> {
        let resume = read_source(&self.paths.resume)?;

        write_text(self.paths.artifact(SMOKE_TEST_FILE), &smoke_test_fragment())?;

        let fragment = self.renderer.render(&resume);
        write_text(self.paths.artifact(CONVERTED_FILE), &fragment)?;

        let title = extract_title(&resume);
        let template = Template::load(&self.paths.template)?;
        let page = template.render(&page_title(&title), &fragment);

        let index_path = self.paths.artifact(INDEX_FILE);
        write_text(&index_path, &page)?;
        info!(path = %index_path.display(), title = %title, "Generated resume page");

        let analysis = match model {
            Some(model) => Some(
                AtsAnalyzer::new(model)
                    .run(&resume, self.paths.artifact(ATS_ANALYSIS_FILE))
                    .await?,
            ),
            None => {
                info!("Skipping ATS analysis");
                None
            }
        };

        Ok(BuildReport {
            title,
            index_path,
            analysis,
        })
    }
}

/// Formats the `<title>` text placed into the template.
pub fn page_title(title: &str) -> String {
    format!("{} — Resume", title)
}

/// Static fragment proving the output directory is writable.
pub fn smoke_test_fragment() -> String {
    html! { h1 { "Hello from Phase 2!" } }.into_string()
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read resume: {}", path.display()))
}
