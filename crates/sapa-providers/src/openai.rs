//! OpenAI-compatible chat-completion provider.
//!
//! Works with OpenAI's API and any endpoint that speaks `/chat/completions`.
//! Transport failures are reported with `timeout` / `network` in the error
//! text and HTTP error bodies are passed through verbatim, so callers can
//! classify failures by message content.

use async_trait::async_trait;
use sapa_core::{
    config::OpenAiConfig,
    context::{ApiMessage, Context},
    error::SapaError,
    traits::Provider,
};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Upper bound for one completion request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenAI-compatible provider.
pub struct OpenAiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiProvider {
    /// Create from config values.
    pub fn from_config(config: &OpenAiConfig) -> Result<Self, SapaError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SapaError::Provider(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(&self, context: &Context) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: context
                .model
                .clone()
                .unwrap_or_else(|| self.model.clone()),
            messages: build_openai_messages(&context.to_api_messages()),
            max_tokens: context.max_tokens.unwrap_or(self.max_tokens),
            temperature: context.temperature.unwrap_or(self.temperature),
        }
    }
}

/// Convert role-tagged context messages into the OpenAI wire shape.
pub(crate) fn build_openai_messages(api_messages: &[ApiMessage]) -> Vec<ChatMessage> {
    api_messages
        .iter()
        .map(|m| ChatMessage {
            role: m.role.clone(),
            content: m.content.clone(),
        })
        .collect()
}

/// Map a reqwest transport error into a classifiable provider error.
pub(crate) fn transport_error(e: reqwest::Error) -> SapaError {
    if e.is_timeout() {
        SapaError::Provider(format!("openai request timeout: {e}"))
    } else if e.is_connect() || e.is_request() {
        SapaError::Provider(format!("openai network error: {e}"))
    } else {
        SapaError::Provider(format!("openai request failed: {e}"))
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub(crate) struct ChatMessage {
    pub role: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Serialize)]
pub(crate) struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Deserialize)]
pub(crate) struct ChatCompletionResponse {
    pub choices: Option<Vec<ChatChoice>>,
    pub usage: Option<ChatUsage>,
}

#[derive(Deserialize)]
pub(crate) struct ChatChoice {
    pub message: Option<ChatMessage>,
}

#[derive(Deserialize)]
pub(crate) struct ChatUsage {
    pub total_tokens: Option<u64>,
}

impl ChatCompletionResponse {
    /// First choice's content, if non-empty.
    pub(crate) fn first_text(&self) -> Option<String> {
        self.choices
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.message.as_ref())
            .map(|m| m.content.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    /// Returns an empty string when the API answered without content.
    async fn complete(&self, context: &Context) -> Result<String, SapaError> {
        let body = self.build_request(context);
        let start = Instant::now();

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        debug!(
            "openai: POST {url} model={} messages={}",
            body.model,
            body.messages.len()
        );

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            warn!("openai: request rejected with {status}");
            return Err(SapaError::Provider(format!(
                "openai returned {status}: {text}"
            )));
        }

        let parsed: ChatCompletionResponse = resp
            .json()
            .await
            .map_err(|e| SapaError::Provider(format!("openai: failed to parse response: {e}")))?;

        let tokens = parsed.usage.as_ref().and_then(|u| u.total_tokens);
        debug!(
            "openai: completed in {}ms, tokens={tokens:?}",
            start.elapsed().as_millis()
        );

        Ok(parsed.first_text().unwrap_or_default())
    }
}
