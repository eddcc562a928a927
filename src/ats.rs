//! ATS readiness analysis.
//!
//! A hosted text model is asked to score the resume and answer in JSON. A
//! failed call never aborts the build: [`AtsAnalyzer::analyze`] returns the
//! error explicitly and [`AtsAnalyzer::analyze_or_fallback`] substitutes a
//! deterministic local score.

mod analysis;
mod analyzer;
mod bedrock;
mod model;
mod prompt;

pub use analysis::{AtsAnalysis, FALLBACK_KEYWORDS, FALLBACK_SUGGESTION, NON_JSON_SUGGESTION};
pub use analyzer::AtsAnalyzer;
pub use bedrock::{BedrockModel, DEFAULT_MODEL_ID, DEFAULT_REGION};
pub use model::{ModelError, TextModel};
pub use prompt::build_prompt;
