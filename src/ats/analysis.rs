//! ATS analysis record and the policies that produce it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::util::word_count;

/// Keywords reported by the local fallback.
pub const FALLBACK_KEYWORDS: [&str; 3] = ["AWS", "Terraform", "GitHub Actions"];

/// Suggestion reported by the local fallback.
pub const FALLBACK_SUGGESTION: &str = "Fallback analysis used because Bedrock call failed.";

/// Suggestion reported when the model answered with something other than JSON.
pub const NON_JSON_SUGGESTION: &str = "Bedrock returned non-JSON output; see raw_output.";

const FALLBACK_MIN_SCORE: usize = 40;
const FALLBACK_MAX_SCORE: usize = 90;
const FALLBACK_WORDS_PER_POINT: usize = 10;
const MAX_SCORE: i64 = 100;

/// ATS readiness report for one build.
///
/// Serialized to `ats_analysis.json`; `raw_output` is only present when the
/// model response could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsAnalysis {
    pub overall_score: u32,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub missing_sections: Vec<String>,
    #[serde(default)]
    pub suggestions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_output: Option<String>,
}

impl AtsAnalysis {
    /// Interprets model text as an analysis.
    ///
    /// A JSON object (optionally wrapped in a markdown code fence) supplies
    /// the four fields; absent or mistyped fields fall back to zero/empty and
    /// the score is clamped to 0..=100. Any other text yields a zero score
    /// record that keeps the untouched text in `raw_output`.
    pub fn from_model_output(text: &str) -> Self {
        match serde_json::from_str::<Value>(strip_json_fences(text)) {
            Ok(Value::Object(fields)) => Self::from_fields(&fields),
            _ => Self::non_json(text),
        }
    }

    /// Deterministic local analysis used when the model call fails.
    ///
    /// Score is one point per ten words, clamped to 40..=90.
    pub fn fallback(resume: &str) -> Self {
        let score = (word_count(resume) / FALLBACK_WORDS_PER_POINT)
            .clamp(FALLBACK_MIN_SCORE, FALLBACK_MAX_SCORE);

        Self {
            overall_score: score as u32,
            keywords: FALLBACK_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            missing_sections: Vec::new(),
            suggestions: FALLBACK_SUGGESTION.to_string(),
            raw_output: None,
        }
    }

    /// Returns true when the model answered but not with JSON.
    pub fn is_unparsed(&self) -> bool {
        self.raw_output.is_some()
    }

    fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            overall_score: fields
                .get("overall_score")
                .and_then(score_from_value)
                .unwrap_or(0),
            keywords: fields.get("keywords").map(string_list).unwrap_or_default(),
            missing_sections: fields
                .get("missing_sections")
                .map(string_list)
                .unwrap_or_default(),
            suggestions: fields
                .get("suggestions")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            raw_output: None,
        }
    }

    fn non_json(text: &str) -> Self {
        Self {
            overall_score: 0,
            keywords: Vec::new(),
            missing_sections: Vec::new(),
            suggestions: NON_JSON_SUGGESTION.to_string(),
            raw_output: Some(text.to_string()),
        }
    }
}

/// Reads an integer score from a number or numeric string.
fn score_from_value(value: &Value) -> Option<u32> {
    let score = value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
        .or_else(|| value.as_str()?.trim().parse::<i64>().ok())?;
    Some(score.clamp(0, MAX_SCORE) as u32)
}

fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));

    match inner {
        Some(stripped) => {
            let stripped = stripped.trim_start();
            stripped
                .strip_suffix("```")
                .map(str::trim)
                .unwrap_or(stripped)
        }
        None => text,
    }
}
