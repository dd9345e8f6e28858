use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::container::Container;
use super::controller::{compare_controller, health_controller, price_controller};

pub const DEFAULT_CORS_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:5173"];

/// Build the HTTP router. `cors_origins` entries that are not valid header
/// values are skipped.
pub fn create_router(container: Arc<Container>, cors_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health_controller::root))
        .route("/health", get(health_controller::health))
        .route("/api/compare", post(compare_controller::compare))
        .route("/api/compare/", post(compare_controller::compare))
        .route(
            "/api/compare/extract-details",
            post(compare_controller::extract_details),
        )
        .route("/api/price/estimate", post(price_controller::estimate))
        .route("/api/price/health", get(price_controller::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(container)
}

pub async fn run_server(
    container: Arc<Container>,
    addr: SocketAddr,
    cors_origins: &[String],
) -> Result<()> {
    let app = create_router(container, cors_origins);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Car Match API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
