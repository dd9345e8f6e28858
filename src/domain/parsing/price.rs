use crate::domain::{Extraction, PriceRange};

use super::currency::{self, Currency, PriceLabel, PricePatterns, PriceToken};
use super::{first_success, Strategy};

pub const ESTIMATE_PLACEHOLDER: &str = "Price estimate included in analysis";

const RANGE_STRATEGIES: &[Strategy<PricePatterns, Vec<PriceToken>>] = &[
    ("labeled min/max lines", labeled_range_tokens),
    ("currency scan", scanned_range_tokens),
];

const ESTIMATE_STRATEGIES: &[Strategy<PricePatterns, String>] = &[
    ("labeled most likely price", labeled_estimate),
    ("first currency amount", first_scanned_amount),
];

/// Read the min/max price range out of the model's prose.
///
/// Falls back to [`PriceRange::not_available`] when nothing priced is found.
pub fn extract_price_range(text: &str) -> Extraction<PriceRange> {
    let patterns = match currency::patterns() {
        Ok(patterns) => patterns,
        Err(e) => return Extraction::failed(PriceRange::not_available(), e),
    };

    match first_success(RANGE_STRATEGIES, patterns, text).and_then(|t| range_from_tokens(&t)) {
        Some(range) => Extraction::Found(range),
        None => Extraction::no_match(PriceRange::not_available()),
    }
}

/// Read the single most likely price, as displayed in the text.
pub fn extract_estimated_price(text: &str) -> Extraction<String> {
    let patterns = match currency::patterns() {
        Ok(patterns) => patterns,
        Err(e) => return Extraction::failed(ESTIMATE_PLACEHOLDER.to_string(), e),
    };

    match first_success(ESTIMATE_STRATEGIES, patterns, text) {
        Some(price) => Extraction::Found(price),
        None => Extraction::no_match(ESTIMATE_PLACEHOLDER.to_string()),
    }
}

fn labeled_range_tokens(patterns: &PricePatterns, text: &str) -> Option<Vec<PriceToken>> {
    Currency::BY_PRIORITY.iter().find_map(|&currency| {
        let min = patterns.labeled(text, PriceLabel::Minimum, currency)?;
        let max = patterns.labeled(text, PriceLabel::Maximum, currency)?;
        let tokens: Vec<PriceToken> = [min, max].iter().filter_map(|raw| raw.to_token()).collect();
        (!tokens.is_empty()).then_some(tokens)
    })
}

// Only the highest-priority symbol that appears at all is considered.
fn scanned_range_tokens(patterns: &PricePatterns, text: &str) -> Option<Vec<PriceToken>> {
    let raw = Currency::BY_PRIORITY
        .iter()
        .map(|&currency| patterns.scan(text, currency))
        .find(|found| !found.is_empty())?;

    let tokens: Vec<PriceToken> = raw.iter().filter_map(|r| r.to_token()).collect();
    (!tokens.is_empty()).then_some(tokens)
}

fn labeled_estimate(patterns: &PricePatterns, text: &str) -> Option<String> {
    Currency::BY_PRIORITY
        .iter()
        .find_map(|&currency| patterns.labeled(text, PriceLabel::MostLikely, currency))
        .map(|raw| raw.display())
}

fn first_scanned_amount(patterns: &PricePatterns, text: &str) -> Option<String> {
    Currency::BY_PRIORITY
        .iter()
        .find_map(|&currency| patterns.scan(text, currency).into_iter().next())
        .map(|raw| raw.display())
}

fn range_from_tokens(tokens: &[PriceToken]) -> Option<PriceRange> {
    let low = tokens.iter().min_by(|a, b| a.value.total_cmp(&b.value))?;
    let high = tokens.iter().max_by(|a, b| a.value.total_cmp(&b.value))?;

    Some(PriceRange {
        min: low.value,
        max: high.value,
        min_display: Some(low.display.clone()),
        max_display: Some(high.display.clone()),
        currency_detected: Some(low.currency.symbol().to_string()),
    })
}
