use std::collections::BTreeMap;

const SUMMARY_TOPICS: [&str; 4] = ["performance", "fuel_efficiency", "features", "value"];
const SUMMARY_STATUS: &str = "Analysis included in comparison";

/// Fixed topic → status map attached to every successful comparison.
///
/// Not derived from the comparison text.
pub fn comparison_summary() -> BTreeMap<String, String> {
    SUMMARY_TOPICS
        .iter()
        .map(|topic| (topic.to_string(), SUMMARY_STATUS.to_string()))
        .collect()
}
