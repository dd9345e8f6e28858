use crate::domain::Extraction;

pub const RECOMMENDATION_FALLBACK: &str =
    "Please refer to the detailed comparison above for recommendations.";

const MARKERS: [&str; 2] = ["recommendation", "conclusion"];

/// Everything after the first line mentioning a recommendation or
/// conclusion, kept verbatim.
pub fn extract_recommendation(text: &str) -> Extraction<String> {
    let mut lines = text.lines();
    let marker_seen = lines.by_ref().any(|line| {
        let lower = line.to_lowercase();
        MARKERS.iter().any(|m| lower.contains(m))
    });

    if !marker_seen {
        return Extraction::no_match(RECOMMENDATION_FALLBACK.to_string());
    }

    let recommendation = lines.collect::<Vec<_>>().join("\n");
    if recommendation.trim().is_empty() {
        return Extraction::no_match(RECOMMENDATION_FALLBACK.to_string());
    }

    Extraction::Found(recommendation)
}
