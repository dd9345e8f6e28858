use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::prompts::details_extraction_messages;
use crate::application::ChatClient;
use crate::domain::parsing::parse_extracted_details;
use crate::domain::{DomainError, ExtractedDetails};

/// Turns a free-text listing into `field_name -> value` pairs via the model.
pub struct ExtractDetailsUseCase {
    chat_client: Arc<dyn ChatClient>,
}

impl ExtractDetailsUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub async fn execute(&self, description: &str) -> Result<ExtractedDetails, DomainError> {
        if description.trim().is_empty() {
            return Err(DomainError::invalid_input("description must not be empty"));
        }

        let messages = details_extraction_messages(description);
        match self.chat_client.complete(&messages).await {
            Ok(text) => {
                let details = parse_extracted_details(&text);
                debug!("Extracted {} detail fields", details.len());
                Ok(ExtractedDetails::new(details))
            }
            Err(e) => {
                warn!("Detail extraction failed: {}", e);
                Ok(ExtractedDetails::raw(description))
            }
        }
    }
}
