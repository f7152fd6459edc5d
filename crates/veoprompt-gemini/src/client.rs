//! Gemini `generateContent` client.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use veoprompt_models::{response_schema, Language, ModelVariant, PromptDocument};

use crate::directives::{document_directive, suggestion_directive};
use crate::error::{GeminiError, GeminiResult};

/// Production API base URL.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Gemini API client.
///
/// Holding a client is the "initialized" state; dropping it deactivates the
/// credential. The client never reads or writes the prompt store.
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    http: Client,
}

/// Gemini API request.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
}

/// Gemini API response.
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: String,
}

impl GeminiClient {
    /// Create a client for the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, GEMINI_API_BASE)
    }

    /// Create a client against a custom endpoint (used by tests).
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            http: Client::new(),
        }
    }

    /// Create a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> GeminiResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| GeminiError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    /// Generate a full prompt document from a free-text scene concept.
    ///
    /// The response is constrained to the prompt schema and parsed into a
    /// [`PromptDocument`]. Any failure yields an error and no partial
    /// document.
    pub async fn generate_document(
        &self,
        description: &str,
        language: Language,
        variant: ModelVariant,
    ) -> GeminiResult<PromptDocument> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: document_directive(description, language),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            }),
        };

        let text = self.generate_content(variant, &request).await?;
        let document = serde_json::from_str(strip_code_fence(&text))?;
        debug!(model = variant.as_str(), "Generated prompt document");
        Ok(document)
    }

    /// Generate replacement text for a single field.
    ///
    /// Returns the trimmed response text; merging it into the document is the
    /// caller's responsibility.
    pub async fn suggest_field(
        &self,
        field_label: &str,
        current_value: &str,
        context: &str,
        language: Language,
        variant: ModelVariant,
    ) -> GeminiResult<String> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: suggestion_directive(field_label, current_value, context, language),
                }],
            }],
            generation_config: None,
        };

        let text = self.generate_content(variant, &request).await?;
        Ok(text.trim().to_string())
    }

    /// Issue a `generateContent` call and extract the first candidate text.
    async fn generate_content(
        &self,
        variant: ModelVariant,
        request: &GeminiRequest,
    ) -> GeminiResult<String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url,
            variant.as_str(),
            self.api_key
        );

        let response = self.http.post(&url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Gemini API call failed");
            return Err(GeminiError::Api { status, body });
        }

        let payload: GeminiResponse = response.json().await?;
        payload
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or(GeminiError::EmptyResponse)
    }
}

/// Strip a surrounding markdown code fence, if present.
///
/// Gemini occasionally wraps JSON output in ```json fences even when a JSON
/// mime type was requested.
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let text = text.strip_prefix("```json").unwrap_or(text);
    let text = text.strip_prefix("```").unwrap_or(text);
    let text = text.strip_suffix("```").unwrap_or(text);
    text.trim()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn candidate_response(text: &str) -> Value {
        json!({
            "candidates": [
                {"content": {"parts": [{"text": text}]}}
            ]
        })
    }

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[tokio::test]
    async fn test_generate_document_success() {
        let server = MockServer::start().await;
        let doc = PromptDocument::empty();
        let body = serde_json::to_string(&doc).unwrap();

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
            .and(query_param("key", "test-key"))
            .and(body_partial_json(json!({
                "generationConfig": {"responseMimeType": "application/json"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_response(&body)))
            .mount(&server)
            .await;

        let client = GeminiClient::with_base_url("test-key", server.uri());
        let generated = client
            .generate_document("an empty stage", Language::En, ModelVariant::Flash)
            .await
            .unwrap();
        assert_eq!(generated, doc);
    }

    #[tokio::test]
    async fn test_generate_document_strips_fences() {
        let server = MockServer::start().await;
        let doc = PromptDocument::empty();
        let fenced = format!("```json\n{}\n```", serde_json::to_string(&doc).unwrap());

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate_response(&fenced)))
            .mount(&server)
            .await;

        let client = GeminiClient::with_base_url("test-key", server.uri());
        let generated = client
            .generate_document("an empty stage", Language::En, ModelVariant::Flash)
            .await
            .unwrap();
        assert_eq!(generated, doc);
    }

    #[tokio::test]
    async fn test_generate_document_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let client = GeminiClient::with_base_url("test-key", server.uri());
        let err = client
            .generate_document("a scene", Language::En, ModelVariant::Flash)
            .await
            .unwrap_err();
        match err {
            GeminiError::Api { status, body } => {
                assert_eq!(status.as_u16(), 429);
                assert_eq!(body, "quota exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_generate_document_rejects_invalid_structure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(candidate_response("{\"scene_settings\": {}}")),
            )
            .mount(&server)
            .await;

        let client = GeminiClient::with_base_url("test-key", server.uri());
        let err = client
            .generate_document("a scene", Language::En, ModelVariant::Flash)
            .await
            .unwrap_err();
        assert!(matches!(err, GeminiError::InvalidDocument(_)));
    }

    #[tokio::test]
    async fn test_generate_document_empty_candidates() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let client = GeminiClient::with_base_url("test-key", server.uri());
        let err = client
            .generate_document("a scene", Language::En, ModelVariant::Flash)
            .await
            .unwrap_err();
        assert!(matches!(err, GeminiError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_suggest_field_trims_and_uses_pro_model() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-pro:generateContent"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(candidate_response("  stormy night\n")),
            )
            .mount(&server)
            .await;

        let client = GeminiClient::with_base_url("test-key", server.uri());
        let suggestion = client
            .suggest_field("Lighting", "", "noir chase", Language::En, ModelVariant::Pro)
            .await
            .unwrap();
        assert_eq!(suggestion, "stormy night");
    }
}
