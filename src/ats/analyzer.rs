//! Resume analysis with an explicit local fallback branch.

use anyhow::Result;
use std::path::Path;
use tracing::{info, warn};

use super::analysis::AtsAnalysis;
use super::model::{ModelError, TextModel};
use super::prompt::build_prompt;
use crate::util::write_json;

/// Scores a resume for ATS readiness through a text generation model.
pub struct AtsAnalyzer<'m> {
    model: &'m dyn TextModel,
}

impl<'m> AtsAnalyzer<'m> {
    pub fn new(model: &'m dyn TextModel) -> Self {
        Self { model }
    }

    /// Asks the model for an analysis.
    ///
    /// Output that is not a JSON object still succeeds, as a zero score
    /// record carrying the raw text.
    ///
    /// # Errors
    ///
    /// Returns error if the model could not be invoked or its response
    /// carried no output text
    pub async fn analyze(&self, resume: &str) -> Result<AtsAnalysis, ModelError> {
        let prompt = build_prompt(resume);
        let output = self.model.generate(&prompt).await?;
        let analysis = AtsAnalysis::from_model_output(&output);

        if analysis.is_unparsed() {
            warn!("Model returned non-JSON output, keeping it as raw_output");
        }

        Ok(analysis)
    }

    /// Analyzes the resume, substituting [`AtsAnalysis::fallback`] on any
    /// model error. Never fails.
    pub async fn analyze_or_fallback(&self, resume: &str) -> AtsAnalysis {
        match self.analyze(resume).await {
            Ok(analysis) => analysis,
            Err(err) => {
                warn!(error = %err, "ATS analysis failed, using local fallback");
                AtsAnalysis::fallback(resume)
            }
        }
    }

    /// Analyzes the resume and writes the result as pretty JSON to `path`.
    ///
    /// # Errors
    ///
    /// Returns error only if the artifact cannot be written
    pub async fn run(&self, resume: &str, path: impl AsRef<Path>) -> Result<AtsAnalysis> {
        let analysis = self.analyze_or_fallback(resume).await;
        write_json(path.as_ref(), &analysis)?;
        info!(
            path = %path.as_ref().display(),
            score = analysis.overall_score,
            "Wrote ATS analysis"
        );
        Ok(analysis)
    }
}
