//! Gemini API client struct, request building, and response parsing.

use crate::session::SessionConfig;
use crate::{AiError, AiResponse, Message, Role, TokenUsage};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::Initialization(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub(crate) fn api_url(&self, model: &str) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        )
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(
        &self,
        session: &SessionConfig,
        messages: &[Message],
    ) -> serde_json::Value {
        let contents: Vec<_> = messages
            .iter()
            .map(|msg| {
                let role = match msg.role {
                    Role::User => "user",
                    Role::Assistant => "model",
                };
                serde_json::json!({
                    "role": role,
                    "parts": [{ "text": msg.content }]
                })
            })
            .collect();

        serde_json::json!({
            "contents": contents,
            "systemInstruction": {
                "parts": [{ "text": session.system_instruction }]
            },
            "generationConfig": {
                "maxOutputTokens": session.max_output_tokens,
                "temperature": session.temperature,
            }
        })
    }

    /// Parse a `generateContent` response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<AiResponse, AiError> {
        let candidates = json["candidates"].as_array();
        let Some(first) = candidates.and_then(|c| c.first()) else {
            if let Some(reason) = json["promptFeedback"]["blockReason"].as_str() {
                return Err(AiError::ApiError(format!("prompt blocked: {reason}")));
            }
            return Err(AiError::ParseError("no candidates in response".to_string()));
        };

        let content = first["content"]["parts"]
            .as_array()
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect::<String>()
            })
            .unwrap_or_default();

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(AiResponse { content, usage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GeminiClient {
        GeminiClient::new(GeminiConfig::new("test-key")).unwrap()
    }

    fn session() -> SessionConfig {
        SessionConfig::new("gemini-2.5-flash", "You are a helpful portfolio assistant.")
    }

    #[test]
    fn api_url_includes_model_and_method() {
        let client = GeminiClient::new(
            GeminiConfig::new("k").with_base_url("http://localhost:9000/models/"),
        )
        .unwrap();
        assert_eq!(
            client.api_url("gemini-2.5-flash"),
            "http://localhost:9000/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn request_body_maps_roles_and_settings() {
        let messages = vec![
            Message::user("Hi"),
            Message::assistant("Hello!"),
            Message::user("What do you build?"),
        ];
        let body = client().build_request_body(&session(), &messages);

        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["parts"][0]["text"], "What do you build?");
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "You are a helpful portfolio assistant."
        );
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 500);
        assert_eq!(body["generationConfig"]["temperature"], 0.7);
    }

    #[test]
    fn parses_text_parts_and_usage() {
        let json = serde_json::json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "text": "I know " }, { "text": "Rust." }]
                }
            }],
            "usageMetadata": { "promptTokenCount": 120, "candidatesTokenCount": 4 }
        });
        let response = client().parse_response(json).unwrap();
        assert_eq!(response.content, "I know Rust.");
        assert_eq!(response.usage.input_tokens, 120);
        assert_eq!(response.usage.output_tokens, 4);
    }

    #[test]
    fn candidate_without_parts_is_empty_text() {
        let json = serde_json::json!({
            "candidates": [{ "finishReason": "MAX_TOKENS", "content": { "role": "model" } }]
        });
        let response = client().parse_response(json).unwrap();
        assert!(response.content.is_empty());
        assert_eq!(response.usage.total_tokens(), 0);
    }

    #[test]
    fn missing_candidates_is_parse_error() {
        let err = client().parse_response(serde_json::json!({})).unwrap_err();
        assert!(matches!(err, AiError::ParseError(_)));
    }

    #[test]
    fn blocked_prompt_is_api_error() {
        let json = serde_json::json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        let err = client().parse_response(json).unwrap_err();
        assert_eq!(err.to_string(), "API error: prompt blocked: SAFETY");
    }

    #[test]
    fn config_debug_redacts_key() {
        let debug = format!("{:?}", GeminiConfig::new("super-secret"));
        assert!(!debug.contains("super-secret"));
    }
}
