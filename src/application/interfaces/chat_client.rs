use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

pub const DEFAULT_MODEL: &str = "gpt-4o";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Model and sampling settings fixed for the lifetime of a client.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl GenerationParams {
    pub fn comparison() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.3,
            max_tokens: 2000,
        }
    }

    pub fn pricing() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.2,
            max_tokens: 1500,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Sends a role-tagged conversation to a chat-completion service and returns
/// the assistant's reply text.
///
/// Implementors own transport and vendor details. Every failure (network,
/// authentication, quota, malformed reply) surfaces as a single
/// [`DomainError::Completion`]; nothing is retried.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, DomainError>;
}
