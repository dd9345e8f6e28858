use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const COMPARISON_ERROR_RECOMMENDATION: &str =
    "Unable to provide recommendation due to an error.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub comparison: String,
    pub summary: BTreeMap<String, String>,
    pub recommendation: String,
}

impl ComparisonResult {
    /// Response returned when the completion call fails; keeps the success shape.
    pub fn from_error(message: &str) -> Self {
        Self {
            comparison: format!("Error occurred during comparison: {message}"),
            summary: BTreeMap::new(),
            recommendation: COMPARISON_ERROR_RECOMMENDATION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDetails {
    pub details: BTreeMap<String, String>,
}

impl ExtractedDetails {
    pub fn new(details: BTreeMap<String, String>) -> Self {
        Self { details }
    }

    /// Fallback when the model could not be reached: echo the input back.
    pub fn raw(description: &str) -> Self {
        let mut details = BTreeMap::new();
        details.insert("raw_description".to_string(), description.to_string());
        Self { details }
    }
}
