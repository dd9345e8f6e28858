use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::connector::api::{ApiError, Container};
use crate::domain::{PriceEstimateRequest, PriceEstimateResult};

pub async fn estimate(
    State(container): State<Arc<Container>>,
    Json(request): Json<PriceEstimateRequest>,
) -> Result<Json<PriceEstimateResult>, ApiError> {
    let result = container
        .estimate_use_case()
        .execute(request)
        .await
        .map_err(|e| ApiError::from_domain("Price estimation failed", e))?;

    Ok(Json(result))
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "price-estimation",
        "message": "Price estimation service is running"
    }))
}
