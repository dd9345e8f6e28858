mod compare_vehicles;
mod estimate_price;
mod extract_details;

pub use compare_vehicles::*;
pub use estimate_price::*;
pub use extract_details::*;

use tracing::debug;

use crate::domain::Extraction;

/// Unwrap an extraction, noting fallbacks at debug level.
fn settle<T>(field: &str, extraction: Extraction<T>) -> T {
    if let Some(reason) = extraction.reason() {
        debug!("{} extraction fell back to default ({})", field, reason);
    }
    extraction.into_value()
}
