//! Anthropic Messages API client (`POST /v1/messages`).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use super::{LlmError, ModelClient, ModelRequest, ModelResponse};
use crate::config::Config;

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Client for the Anthropic Messages API.
pub struct AnthropicClient {
    api_key: String,
    base_url: String,
    client: Client,
}

impl AnthropicClient {
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        Self::new(&config.api_key, &config.base_url, config.request_timeout)
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }
}

#[async_trait]
impl ModelClient for AnthropicClient {
    async fn send(&self, request: &ModelRequest) -> Result<ModelResponse, LlmError> {
        debug!(
            "Sending {} messages to {} (tools: {})",
            request.messages.len(),
            request.model,
            request.tools.as_ref().map_or(0, |t| t.len())
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| LlmError::Decode(e.to_string()))
    }
}

/// Pull `error.message` out of an API error body, falling back to the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::{ContentBlock, Message, StopReason};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> ModelRequest {
        ModelRequest {
            model: "claude-test".into(),
            temperature: 0.0,
            max_tokens: 800,
            system: "be brief".into(),
            messages: vec![Message::user_text("What is AI?")],
            tools: None,
            tool_choice: None,
        }
    }

    async fn client_for(server: &MockServer) -> AnthropicClient {
        AnthropicClient::new("sk-test", &server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn sends_headers_and_decodes_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "sk-test"))
            .and(header("anthropic-version", ANTHROPIC_VERSION))
            .and(body_partial_json(json!({
                "model": "claude-test",
                "max_tokens": 800,
                "system": "be brief",
                "messages": [{"role": "user", "content": "What is AI?"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "msg_1",
                "type": "message",
                "role": "assistant",
                "content": [{"type": "text", "text": "Artificial intelligence."}],
                "stop_reason": "end_turn"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server).await.send(&request()).await.unwrap();
        assert_eq!(response.stop_reason, Some(StopReason::EndTurn));
        assert_eq!(response.text().as_deref(), Some("Artificial intelligence."));
    }

    #[tokio::test]
    async fn decodes_tool_use_blocks() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{
                    "type": "tool_use",
                    "id": "toolu_9",
                    "name": "get_course_outline",
                    "input": {"course_title": "MCP"}
                }],
                "stop_reason": "tool_use"
            })))
            .mount(&server)
            .await;

        let response = client_for(&server).await.send(&request()).await.unwrap();
        assert!(response.wants_tools());
        match &response.content[0] {
            ContentBlock::ToolUse { id, name, input } => {
                assert_eq!(id, "toolu_9");
                assert_eq!(name, "get_course_outline");
                assert_eq!(input["course_title"], json!("MCP"));
            }
            other => panic!("unexpected block: {:?}", other),
        }
    }

    #[tokio::test]
    async fn api_error_carries_status_and_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(529).set_body_json(json!({
                "type": "error",
                "error": {"type": "overloaded_error", "message": "Overloaded"}
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).await.send(&request()).await.unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 529);
                assert_eq!(message, "Overloaded");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.send(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Decode(_)));
    }

    #[test]
    fn error_message_falls_back_to_body() {
        assert_eq!(error_message("  gateway timeout \n"), "gateway timeout");
        assert_eq!(
            error_message(r#"{"error": {"message": "invalid x-api-key"}}"#),
            "invalid x-api-key"
        );
    }
}
