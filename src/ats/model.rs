//! Text generation seam used by the ATS analyzer.

use async_trait::async_trait;
use thiserror::Error;

/// Failure to obtain output text from the model.
///
/// Parse problems in the output text itself are not errors; they are
/// handled by [`AtsAnalysis::from_model_output`](super::AtsAnalysis::from_model_output).
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model invocation failed: {0}")]
    Invoke(String),

    #[error("model response envelope is malformed: {0}")]
    Envelope(#[from] serde_json::Error),

    #[error("model returned no output text")]
    EmptyOutput,
}

/// Hosted text generation model.
///
/// Implementations make exactly one attempt per call; retries are not part
/// of the contract.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Returns the generated text for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, ModelError>;
}
