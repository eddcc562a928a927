//! Amazon Bedrock client for Titan text models.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::model::{ModelError, TextModel};

/// Region used when none is configured.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Model used when none is configured.
pub const DEFAULT_MODEL_ID: &str = "amazon.titan-text-lite-v1";

const MAX_TOKEN_COUNT: u32 = 512;
const TEMPERATURE: f32 = 0.2;
const TOP_P: f32 = 0.9;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TitanRequest<'a> {
    input_text: &'a str,
    text_generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_token_count: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct TitanResponse {
    #[serde(default)]
    results: Vec<TitanResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TitanResult {
    output_text: String,
}

/// Bedrock runtime client bound to one model.
///
/// Credentials come from the default AWS provider chain. Network timeouts
/// are the SDK defaults.
#[derive(Clone)]
pub struct BedrockModel {
    client: Client,
    model_id: String,
}

impl BedrockModel {
    /// Loads AWS configuration for `region` and binds the client to `model_id`.
    pub async fn connect(region: impl Into<String>, model_id: impl Into<String>) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.into()))
            .load()
            .await;

        Self {
            client: Client::new(&sdk_config),
            model_id: model_id.into(),
        }
    }

    /// Returns the bound model identifier.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

#[async_trait]
impl TextModel for BedrockModel {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let body = request_body(prompt)?;

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .content_type("application/json")
            .accept("application/json")
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|err| ModelError::Invoke(DisplayErrorContext(err).to_string()))?;

        debug!(model_id = %self.model_id, "Bedrock invocation succeeded");

        output_text(response.body().as_ref())
    }
}

/// Encodes the Titan text generation request.
fn request_body(prompt: &str) -> Result<Vec<u8>, ModelError> {
    let request = TitanRequest {
        input_text: prompt,
        text_generation_config: GenerationConfig {
            max_token_count: MAX_TOKEN_COUNT,
            temperature: TEMPERATURE,
            top_p: TOP_P,
        },
    };
    Ok(serde_json::to_vec(&request)?)
}

/// Extracts the first result's output text from a Titan response body.
fn output_text(body: &[u8]) -> Result<String, ModelError> {
    let response: TitanResponse = serde_json::from_slice(body)?;
    response
        .results
        .into_iter()
        .next()
        .map(|result| result.output_text)
        .ok_or(ModelError::EmptyOutput)
}
