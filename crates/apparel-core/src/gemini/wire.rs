//! Gemini `generateContent` request and response bodies.

use serde::{Deserialize, Serialize};

use crate::error::{DescribeError, DescribeResult};
use crate::pipeline::ImageInput;

// --- Request types ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
}

impl GenerateContentRequest {
    /// A single-turn request with the prompt followed by the inline image,
    /// asking for a JSON reply.
    pub fn json_reply(prompt: &str, image: &ImageInput) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: prompt.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type.clone(),
                            data: image.data.clone(),
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        }
    }
}

// --- Response types ---

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Pull `candidates[0].content.parts[0].text` out of a raw reply body.
pub fn extract_candidate_text(body: &str) -> DescribeResult<String> {
    let malformed = |message: String| DescribeError::MalformedResponse {
        message,
        body: body.to_string(),
    };

    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| malformed(format!("Unexpected response shape: {e}")))?;

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| malformed("Response has no candidates".to_string()))?;

    let finish_reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
    let content = candidate.content.ok_or_else(|| {
        malformed(format!(
            "First candidate has no content (finish reason: {finish_reason})"
        ))
    })?;

    content
        .parts
        .into_iter()
        .next()
        .ok_or_else(|| malformed("First candidate has no parts".to_string()))?
        .text
        .ok_or_else(|| malformed("First part has no text".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let image = ImageInput {
            data: "AAAA".to_string(),
            mime_type: "image/png".to_string(),
        };
        let body = serde_json::to_value(GenerateContentRequest::json_reply("hi", &image)).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{
                    "parts": [
                        { "text": "hi" },
                        { "inlineData": { "mimeType": "image/png", "data": "AAAA" } }
                    ]
                }],
                "generationConfig": { "responseMimeType": "application/json" }
            })
        );
    }

    #[test]
    fn test_extract_text() {
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "text": "{\"category\":\"Tops\"}" }], "role": "model" },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "totalTokenCount": 12 }
        })
        .to_string();
        assert_eq!(extract_candidate_text(&body).unwrap(), "{\"category\":\"Tops\"}");
    }

    #[test]
    fn test_missing_candidates_is_malformed() {
        let body = json!({ "promptFeedback": { "blockReason": "SAFETY" } }).to_string();
        let err = extract_candidate_text(&body).unwrap_err();
        assert!(matches!(err, DescribeError::MalformedResponse { .. }));
        assert_eq!(err.response_body(), Some(body.as_str()));
    }

    #[test]
    fn test_empty_candidates_is_malformed() {
        let err = extract_candidate_text(r#"{"candidates": []}"#).unwrap_err();
        assert!(err.to_string().contains("no candidates"));
    }

    #[test]
    fn test_candidate_without_content_reports_finish_reason() {
        let err = extract_candidate_text(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_part_without_text_is_malformed() {
        let body = r#"{"candidates": [{"content": {"parts": [{"inlineData": {}}]}}]}"#;
        assert!(matches!(
            extract_candidate_text(body),
            Err(DescribeError::MalformedResponse { .. })
        ));
    }

    #[test]
    fn test_non_json_envelope_is_malformed() {
        assert!(matches!(
            extract_candidate_text("<html>gateway</html>"),
            Err(DescribeError::MalformedResponse { .. })
        ));
    }
}
