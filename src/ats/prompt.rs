//! Prompt sent to the text generation model.

/// Builds the ATS instruction prompt with the resume embedded verbatim.
pub fn build_prompt(resume: &str) -> String {
    format!(
        r#"
You are an Applicant Tracking System (ATS) assistant.

Analyze the following resume (in Markdown) for ATS readiness.

Return ONLY valid JSON with this exact structure and no extra text:

{{
  "overall_score": <number between 0 and 100>,
  "keywords": [ "keyword1", "keyword2", ... ],
  "missing_sections": [ "section1", "section2", ... ],
  "suggestions": "one or two sentences of advice"
}}

Resume markdown:
"""{resume}"""
"#
    )
}
