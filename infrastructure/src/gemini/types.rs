//! Wire types for `models/{model}:generateContent`
//!
//! Response types accept any subset of fields: Gemini omits `content` for
//! blocked candidates and `groundingMetadata` whenever search was not used.
//! Arrays sent as explicit `null` read as empty.

use medinfo_application::{Citation, GroundedRequest, GroundedResponse};
use serde::{Deserialize, Deserializer, Serialize};

// ==================== Request ====================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,
    pub parts: Vec<TextPart>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TextPart {
    pub text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Tool {
    pub google_search: GoogleSearch,
}

/// Serializes as `{}`
#[derive(Debug, Default, Serialize)]
pub(crate) struct GoogleSearch {}

impl From<&GroundedRequest> for GenerateContentRequest {
    fn from(request: &GroundedRequest) -> Self {
        let tools = if request.web_search {
            vec![Tool {
                google_search: GoogleSearch::default(),
            }]
        } else {
            Vec::new()
        };

        Self {
            system_instruction: Content {
                role: None,
                parts: vec![TextPart {
                    text: request.system_instruction.clone(),
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![TextPart {
                    text: request.prompt.clone(),
                }],
            }],
            tools,
        }
    }
}

// ==================== Response ====================

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct GenerateContentResponse {
    #[serde(deserialize_with = "null_as_empty")]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct Candidate {
    pub content: Option<CandidateContent>,
    pub grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CandidateContent {
    #[serde(deserialize_with = "null_as_empty")]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ResponsePart {
    pub text: Option<String>,
    /// Set on thinking-model reasoning parts, which are not part of the answer
    pub thought: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct GroundingMetadata {
    #[serde(deserialize_with = "null_as_empty")]
    pub grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct GroundingChunk {
    pub web: Option<WebChunk>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct WebChunk {
    pub uri: Option<String>,
    pub title: Option<String>,
}

impl From<GenerateContentResponse> for GroundedResponse {
    fn from(response: GenerateContentResponse) -> Self {
        let Some(candidate) = response.candidates.into_iter().next() else {
            return GroundedResponse::default();
        };

        let texts: Vec<String> = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter(|part| part.thought != Some(true))
            .filter_map(|part| part.text)
            .collect();
        let text = (!texts.is_empty()).then(|| texts.concat());

        let citations = candidate
            .grounding_metadata
            .map(|metadata| metadata.grounding_chunks)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|chunk| chunk.web)
            .map(|web| Citation {
                uri: web.uri,
                title: web.title,
            })
            .collect();

        GroundedResponse { text, citations }
    }
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ErrorEnvelope {
    pub error: Option<ApiError>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ApiError {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use medinfo_domain::Model;
    use serde_json::json;

    fn request(web_search: bool) -> GroundedRequest {
        GroundedRequest {
            model: Model::default(),
            prompt: "กรุณาให้ข้อมูลเกี่ยวกับ: โรคเบาหวาน".to_string(),
            system_instruction: "คุณคือผู้ช่วย".to_string(),
            web_search,
        }
    }

    fn parse(value: serde_json::Value) -> GroundedResponse {
        serde_json::from_value::<GenerateContentResponse>(value)
            .unwrap()
            .into()
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from(&request(true))).unwrap();

        assert_eq!(
            body,
            json!({
                "systemInstruction": { "parts": [{ "text": "คุณคือผู้ช่วย" }] },
                "contents": [{
                    "role": "user",
                    "parts": [{ "text": "กรุณาให้ข้อมูลเกี่ยวกับ: โรคเบาหวาน" }]
                }],
                "tools": [{ "googleSearch": {} }]
            })
        );
    }

    #[test]
    fn test_request_body_without_web_search_omits_tools() {
        let body = serde_json::to_value(GenerateContentRequest::from(&request(false))).unwrap();
        assert!(body.get("tools").is_none());
    }

    #[test]
    fn test_parse_text_and_grounding() {
        let response = parse(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "## ไข้เลือดออก\n" }, { "text": "- พักผ่อน" }]
                },
                "finishReason": "STOP",
                "groundingMetadata": {
                    "webSearchQueries": ["ไข้เลือดออก"],
                    "groundingChunks": [
                        { "web": { "uri": "https://ddc.moph.go.th", "title": "กรมควบคุมโรค" } },
                        { "web": { "uri": "https://example.org" } },
                        { "retrievedContext": { "uri": "gs://bucket" } }
                    ]
                }
            }]
        }));

        assert_eq!(response.text.as_deref(), Some("## ไข้เลือดออก\n- พักผ่อน"));
        assert_eq!(
            response.citations,
            vec![
                Citation::new("https://ddc.moph.go.th", "กรมควบคุมโรค"),
                Citation {
                    uri: Some("https://example.org".to_string()),
                    title: None,
                },
            ]
        );
    }

    #[test]
    fn test_parse_skips_thought_parts() {
        let response = parse(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "thinking...", "thought": true },
                        { "text": "คำตอบ" }
                    ]
                }
            }]
        }));

        assert_eq!(response.text.as_deref(), Some("คำตอบ"));
    }

    #[test]
    fn test_parse_tolerates_missing_fields() {
        assert_eq!(parse(json!({})), GroundedResponse::default());
        assert_eq!(parse(json!({ "candidates": [] })), GroundedResponse::default());
        assert_eq!(parse(json!({ "candidates": [{}] })), GroundedResponse::default());

        // Blocked candidate: no content, but grounding present
        let response = parse(json!({
            "candidates": [{
                "finishReason": "SAFETY",
                "groundingMetadata": {}
            }]
        }));
        assert!(response.text.is_none());
        assert!(response.citations.is_empty());
    }

    #[test]
    fn test_parse_tolerates_null_arrays() {
        assert_eq!(parse(json!({ "candidates": null })), GroundedResponse::default());

        let response = parse(json!({
            "candidates": [{
                "content": { "parts": [{ "text": "ok" }] },
                "groundingMetadata": { "groundingChunks": null }
            }]
        }));
        assert_eq!(response.text.as_deref(), Some("ok"));
        assert!(response.citations.is_empty());

        let response = parse(json!({
            "candidates": [{
                "content": { "parts": null },
                "groundingMetadata": {
                    "groundingChunks": [{ "web": { "uri": "https://a", "title": "A" } }]
                }
            }]
        }));
        assert!(response.text.is_none());
        assert_eq!(response.citations, vec![Citation::new("https://a", "A")]);
    }

    #[test]
    fn test_error_envelope() {
        let envelope: ErrorEnvelope = serde_json::from_value(json!({
            "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
        }))
        .unwrap();

        assert_eq!(
            envelope.error.and_then(|e| e.message).as_deref(),
            Some("API key not valid.")
        );
    }
}
