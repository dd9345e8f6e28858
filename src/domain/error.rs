use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Completion error: {0}")]
    Completion(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl DomainError {
    pub fn completion(msg: impl Into<String>) -> Self {
        Self::Completion(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn is_completion(&self) -> bool {
        matches!(self, Self::Completion(_))
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
