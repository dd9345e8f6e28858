use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const NOT_AVAILABLE: &str = "Not available";
pub const ESTIMATE_ERROR_PRICE: &str = "Unable to estimate due to error";
pub const ESTIMATE_ERROR_ANALYSIS: &str = "Error occurred during price estimation.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_display: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_detected: Option<String>,
}

impl PriceRange {
    /// Bare `{min: 0, max: 0}` used on the error path.
    pub fn zero() -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            min_display: None,
            max_display: None,
            currency_detected: None,
        }
    }

    /// Parser default when no price could be read from the text.
    pub fn not_available() -> Self {
        Self {
            min: 0.0,
            max: 0.0,
            min_display: Some(NOT_AVAILABLE.to_string()),
            max_display: Some(NOT_AVAILABLE.to_string()),
            currency_detected: Some("$".to_string()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.max > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimateResult {
    pub estimated_price: String,
    pub price_range: PriceRange,
    pub factors: BTreeMap<String, String>,
    pub market_analysis: String,
}

impl PriceEstimateResult {
    /// Response returned when the completion call fails; keeps the success shape.
    pub fn from_error(message: &str) -> Self {
        let mut factors = BTreeMap::new();
        factors.insert("error".to_string(), message.to_string());
        Self {
            estimated_price: ESTIMATE_ERROR_PRICE.to_string(),
            price_range: PriceRange::zero(),
            factors,
            market_analysis: ESTIMATE_ERROR_ANALYSIS.to_string(),
        }
    }
}
