//! HTTP boundary layer for the Mirror-It order backend.
//!
//! Wraps the pure order processing core in an axum router with CORS,
//! request tracing, and Prometheus metrics. The notification transport and
//! clock are injected through [`routes::orders::AppState`].

pub mod config;
pub mod cors;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

use routes::orders::AppState;

/// Creates the axum application router with all routes and shared state.
pub fn create_app(
    state: Arc<AppState>,
    metrics_handle: PrometheusHandle,
    allowed_origins: &[String],
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::health::root))
        .route("/api/health", get(routes::health::check))
        .route("/api/place-order", get(routes::orders::place_order_hint))
        .route("/api/place-order", post(routes::orders::place_order))
        .with_state(state)
        .merge(metrics_router)
        .layer(cors::cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}
