use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};

use crate::application::prompts::price_estimation_messages;
use crate::application::ChatClient;
use crate::domain::parsing::{extract_estimated_price, extract_factors, extract_price_range};
use crate::domain::{DomainError, PriceEstimateRequest, PriceEstimateResult};

use super::settle;

pub struct EstimatePriceUseCase {
    chat_client: Arc<dyn ChatClient>,
}

impl EstimatePriceUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>) -> Self {
        Self { chat_client }
    }

    /// Estimate a vehicle's market price.
    ///
    /// Only an empty description is an error. A failed completion call is
    /// reported inside the result (zero range, message under `factors.error`).
    pub async fn execute(
        &self,
        request: PriceEstimateRequest,
    ) -> Result<PriceEstimateResult, DomainError> {
        let car = request.car_details;
        if !car.has_description() {
            return Err(DomainError::invalid_input(
                "car_details.raw_description must not be empty",
            ));
        }

        info!(
            "Estimating price for {} {}",
            car.make().unwrap_or("(unknown make)"),
            car.model().unwrap_or("(unknown model)")
        );
        let start_time = Instant::now();

        let messages = price_estimation_messages(&car);
        let text = match self.chat_client.complete(&messages).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Price estimation failed: {}", e);
                return Ok(PriceEstimateResult::from_error(&e.to_string()));
            }
        };

        let result = Self::parse_estimate(text);

        info!(
            "Price estimate ready in {:.2}s (range available: {})",
            start_time.elapsed().as_secs_f64(),
            result.price_range.is_available()
        );

        Ok(result)
    }

    /// Build the structured result from the model's reply. The full reply is
    /// kept as the market analysis.
    pub fn parse_estimate(text: String) -> PriceEstimateResult {
        PriceEstimateResult {
            estimated_price: settle("estimated price", extract_estimated_price(&text)),
            price_range: settle("price range", extract_price_range(&text)),
            factors: settle("pricing factors", extract_factors(&text)),
            market_analysis: text,
        }
    }
}
