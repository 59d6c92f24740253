//! Gemini `generateContent` wire types.

use serde::{Deserialize, Serialize};

use crate::llm_client::{GenerationOptions, Segment};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

impl GenerateContentRequest {
    pub fn new(segments: &[Segment], options: &GenerationOptions) -> Self {
        let tools = if options.web_search {
            vec![Tool {
                google_search: GoogleSearch {},
            }]
        } else {
            Vec::new()
        };

        Self {
            contents: segments
                .iter()
                .map(|s| Content {
                    role: s.role.as_str().to_string(),
                    parts: vec![Part {
                        text: Some(s.text.clone()),
                    }],
                })
                .collect(),
            generation_config: GenerationConfig {
                top_k: options.top_k,
            },
            tools,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A content part. Non-text parts (inline data, function calls) deserialize with `text: None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub top_k: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub google_search: GoogleSearch,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoogleSearch {}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Set when the API reports a failure in place of a chunk, e.g. mid-stream quota errors.
    #[serde(default)]
    pub error: Option<GeminiErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default, rename = "finishReason")]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate. `None` when there is no candidate.
    pub fn first_candidate_text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text = candidate
            .content
            .as_ref()
            .map(|c| {
                c.parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default();
        Some(text)
    }
}

#[derive(Debug, Deserialize)]
pub struct GeminiError {
    pub error: GeminiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn options(web_search: bool) -> GenerationOptions {
        GenerationOptions {
            model: "gemini-2.0-flash".to_string(),
            top_k: 40,
            web_search,
        }
    }

    #[test]
    fn test_request_serializes_roles_top_k_and_search_tool() {
        let segments = vec![Segment::model("directive"), Segment::user("task")];
        let body =
            serde_json::to_value(GenerateContentRequest::new(&segments, &options(true))).unwrap();

        assert_eq!(
            body,
            json!({
                "contents": [
                    {"role": "model", "parts": [{"text": "directive"}]},
                    {"role": "user", "parts": [{"text": "task"}]}
                ],
                "generationConfig": {"topK": 40},
                "tools": [{"googleSearch": {}}]
            })
        );
    }

    #[test]
    fn test_request_omits_tools_when_search_disabled() {
        let body = serde_json::to_value(GenerateContentRequest::new(
            &[Segment::user("task")],
            &options(false),
        ))
        .unwrap();
        assert!(body.get("tools").is_none());
    }

    #[test]
    fn test_first_candidate_text_joins_parts_and_skips_non_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"role": "model", "parts": [
                    {"text": "1. Outfit"},
                    {"functionCall": {"name": "noop"}},
                    {"text": " Recommendation"}
                ]}},
                {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
            ]
        }))
        .unwrap();
        assert_eq!(
            response.first_candidate_text().as_deref(),
            Some("1. Outfit Recommendation")
        );
    }

    #[test]
    fn test_first_candidate_text_none_without_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({"promptFeedback": {"blockReason": "SAFETY"}})).unwrap();
        assert!(response.first_candidate_text().is_none());
    }

    #[test]
    fn test_error_payload_parsed_with_code() {
        let response: GenerateContentResponse = serde_json::from_value(json!({
            "error": {"code": 429, "message": "Resource exhausted", "status": "RESOURCE_EXHAUSTED"}
        }))
        .unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.code, Some(429));
        assert_eq!(error.message, "Resource exhausted");
        assert!(response.candidates.is_empty());
    }
}
