use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::application::{ChatClient, ChatMessage, GenerationParams};
use crate::domain::DomainError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for OpenAI-compatible chat completion endpoints.
///
/// Model, temperature and token limit are fixed at construction; each
/// [`ChatClient::complete`] call is a single request with no retry. The
/// request timeout bounds how long a hung provider can hold a request.
pub struct OpenAiChatClient {
    client: reqwest::Client,
    api_key: String,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
    params: GenerationParams,
}

impl OpenAiChatClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: &str,
        params: GenerationParams,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            url: format!("{}{}", base_url.trim_end_matches('/'), COMPLETIONS_PATH),
            params,
        })
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    fn status_error(status: StatusCode) -> DomainError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                DomainError::completion(format!("authentication failed ({status})"))
            }
            StatusCode::TOO_MANY_REQUESTS => {
                DomainError::completion(format!("rate limited by provider ({status})"))
            }
            _ => DomainError::completion(format!("API returned {status}")),
        }
    }
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, DomainError> {
        let request = ApiRequest {
            model: &self.params.model,
            messages,
            temperature: self.params.temperature,
            max_tokens: self.params.max_tokens,
        };

        debug!(
            "OpenAiChatClient: sending {} messages to {} (model {})",
            messages.len(),
            self.url,
            self.params.model
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DomainError::completion(format!("request timed out: {e}"))
                } else {
                    DomainError::completion(format!("request failed: {e}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiChatClient: API returned {status}: {body}");
            return Err(Self::status_error(status));
        }

        let api_response: ApiResponse = response
            .json()
            .await
            .map_err(|e| DomainError::completion(format!("failed to parse response: {e}")))?;

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| DomainError::completion("response contained no completion text"))
    }
}
