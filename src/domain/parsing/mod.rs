//! Best-effort extraction of structured fields from model output.
//!
//! Every extractor is pure and infallible: it returns an [`Extraction`]
//! whose value is either what was found or the documented fallback.
//! Multi-step extractors are written as ordered lists of named strategies,
//! tried in declaration order until one yields a value.
//!
//! [`Extraction`]: crate::domain::Extraction

mod currency;
mod details;
mod factors;
mod price;
mod recommendation;
mod summary;

use tracing::debug;

pub use currency::{Currency, PriceToken};
pub use details::parse_extracted_details;
pub use factors::{extract_factors, FACTORS_HEADING, FACTORS_PLACEHOLDER};
pub use price::{extract_estimated_price, extract_price_range, ESTIMATE_PLACEHOLDER};
pub use recommendation::{extract_recommendation, RECOMMENDATION_FALLBACK};
pub use summary::comparison_summary;

/// A named extraction step operating on some shared context `C`.
pub(crate) type Strategy<C, T> = (&'static str, fn(&C, &str) -> Option<T>);

/// Run `strategies` in order and return the first value produced.
pub(crate) fn first_success<C, T>(strategies: &[Strategy<C, T>], ctx: &C, text: &str) -> Option<T> {
    strategies.iter().find_map(|(name, strategy)| {
        let found = strategy(ctx, text);
        if found.is_some() {
            debug!("Extraction strategy '{}' matched", name);
        }
        found
    })
}
