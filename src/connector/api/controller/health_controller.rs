use axum::Json;
use serde_json::{json, Value};

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Car Match API is running! Car comparison and price estimation available.",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "car-match-backend",
        "features": ["car-comparison", "price-estimation"]
    }))
}
