//! Chat provider seam and the OpenAI-compatible HTTP implementation

use super::messages::{ChatMessage, ChatResponse};
use crate::error::{UniverseError, UniverseResult};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::instrument;

/// Output-shape hint passed to the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseFormat {
    /// Free-form text
    Text,
    /// Provider must return a single JSON object
    JsonObject,
}

/// A single generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Model identifier from the resolved connection
    pub model: String,
    /// Assembled role-tagged messages
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature; provider default applies when absent
    pub temperature: Option<f32>,
    /// Optional output-shape hint
    pub response_format: Option<ResponseFormat>,
}

/// External text-generation endpoint
///
/// One blocking call per execution: no retry, no streaming. A slow provider
/// simply blocks the calling flow until the HTTP client's own timeout fires.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Issue a generation call and return the response
    async fn generate(&self, request: &GenerationRequest) -> UniverseResult<ChatResponse>;
}

/// OpenAI-compatible chat-completions provider over HTTP
pub struct HttpChatProvider {
    base_url: String,
    api_key: Option<String>,
    http_client: Client,
}

impl HttpChatProvider {
    /// Create a provider against a chat-completions base URL
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        request_timeout: Duration,
    ) -> UniverseResult<Self> {
        let http_client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| UniverseError::execution(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            http_client,
        })
    }
}

#[async_trait]
impl ChatProvider for HttpChatProvider {
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn generate(&self, request: &GenerationRequest) -> UniverseResult<ChatResponse> {
        let url = format!("{}/chat/completions", self.base_url);
        let request_body = build_request_body(request);

        let mut http_request = self.http_client.post(&url).json(&request_body);
        if let Some(api_key) = &self.api_key {
            http_request = http_request.bearer_auth(api_key);
        }

        let response = http_request
            .send()
            .await
            .map_err(|e| UniverseError::execution(format!("generation request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(UniverseError::execution(format!(
                "generation API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| UniverseError::execution(format!("failed to parse response: {e}")))?;

        parse_chat_response(response_json)
    }
}

/// Build the chat-completions request body
fn build_request_body(request: &GenerationRequest) -> Value {
    let mut body = json!({
        "model": request.model,
        "messages": request.messages,
    });
    if let Some(temperature) = request.temperature {
        body["temperature"] = json!(temperature);
    }
    if request.response_format == Some(ResponseFormat::JsonObject) {
        body["response_format"] = json!({"type": "json_object"});
    }
    body
}

/// Extract the first choice from a chat-completions response
fn parse_chat_response(response: Value) -> UniverseResult<ChatResponse> {
    let choice = response["choices"]
        .as_array()
        .and_then(|choices| choices.first())
        .ok_or_else(|| UniverseError::execution("response contains no choices"))?;

    let content = choice["message"]["content"]
        .as_str()
        .ok_or_else(|| UniverseError::execution("response choice has no message content"))?
        .to_string();

    Ok(ChatResponse {
        content,
        model: response["model"].as_str().map(String::from),
        finish_reason: choice["finish_reason"].as_str().map(String::from),
    })
}
