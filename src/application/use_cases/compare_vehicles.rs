use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::application::prompts::comparison_messages;
use crate::application::ChatClient;
use crate::domain::parsing::{comparison_summary, extract_recommendation};
use crate::domain::{CompareRequest, ComparisonResult, DomainError};

use super::settle;

pub struct CompareVehiclesUseCase {
    chat_client: Arc<dyn ChatClient>,
}

impl CompareVehiclesUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    pub async fn execute(&self, request: CompareRequest) -> Result<ComparisonResult, DomainError> {
        if !request.car1.has_description() || !request.car2.has_description() {
            return Err(DomainError::invalid_input(
                "both vehicles need a non-empty raw_description",
            ));
        }

        info!(
            "Comparing {} against {}",
            request.car1.model().unwrap_or("car 1"),
            request.car2.model().unwrap_or("car 2")
        );
        let start_time = Instant::now();

        let messages = comparison_messages(&request.car1, &request.car2);
        let comparison = match self.chat_client.complete(&messages).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Comparison failed: {}", e);
                return Ok(ComparisonResult::from_error(&e.to_string()));
            }
        };

        let recommendation = settle("recommendation", extract_recommendation(&comparison));

        info!(
            "Comparison ready in {:.2}s",
            start_time.elapsed().as_secs_f64()
        );

        Ok(ComparisonResult {
            comparison,
            summary: comparison_summary(),
            recommendation,
        })
    }
}
