use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::connector::api::{ApiError, Container};
use crate::domain::{CompareRequest, ComparisonResult, ExtractDetailsRequest, ExtractedDetails};

pub async fn compare(
    State(container): State<Arc<Container>>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<ComparisonResult>, ApiError> {
    let result = container
        .compare_use_case()
        .execute(request)
        .await
        .map_err(|e| ApiError::from_domain("Comparison failed", e))?;

    Ok(Json(result))
}

pub async fn extract_details(
    State(container): State<Arc<Container>>,
    Json(request): Json<ExtractDetailsRequest>,
) -> Result<Json<ExtractedDetails>, ApiError> {
    let description = request.into_description();
    let details = container
        .extract_use_case()
        .execute(&description)
        .await
        .map_err(|e| ApiError::from_domain("Detail extraction failed", e))?;

    Ok(Json(details))
}
