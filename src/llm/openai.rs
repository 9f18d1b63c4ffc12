//! OpenAI-compatible chat-completion client
//!
//! Sends one user message per call. Failures are returned as-is; there is
//! no retry.

use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use super::types::{ChatMessage, ChatRequest, ChatResponse, ErrorResponse};
use super::{CompletionProvider, Credential, LlmError};
use crate::config::LlmConfig;

/// Chat-completion API client
pub struct OpenAiClient {
    model: String,
    credential: Credential,
    base_url: String,
    temperature: f32,
    max_tokens: u32,
    http: Client,
}

impl OpenAiClient {
    /// Create a new client from configuration and a resolved credential
    pub fn new(config: &LlmConfig, credential: Credential) -> Result<Self, LlmError> {
        debug!(?config, "OpenAiClient::new: called");
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("GreenPath/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            model: config.model.clone(),
            credential,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            http,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Pull the provider's error message out of a failed response body
    fn error_message(body: &str) -> String {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(parsed) => parsed.error.message,
            Err(_) if body.trim().is_empty() => "empty response body".to_string(),
            Err(_) => body.trim().to_string(),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage::user(prompt)],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let start = Instant::now();
        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(self.credential.expose())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, elapsed_ms = start.elapsed().as_millis() as u64, "Chat completion responded");

        if !status.is_success() {
            let message = Self::error_message(&body);
            warn!(status = status.as_u16(), %message, "Chat completion failed");
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("No completion text in response".to_string()))?;

        info!(
            chars = content.len(),
            "Received itinerary in {:.3}s",
            start.elapsed().as_secs_f64()
        );
        Ok(content)
    }
}
