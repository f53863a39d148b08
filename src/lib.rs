//! HTTP API server exposing a static data endpoint.
//!
//! Serves `GET /api/data` with a fixed JSON payload, with structured
//! logging (tracing) and permissive CORS for browser clients.

pub mod config;
pub mod routes;

use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the Axum application router with all routes.
///
/// Unmatched paths and methods fall through to Axum's defaults
/// (404 / 405); no custom fallback is installed.
pub fn create_app() -> Router {
    Router::new()
        .route("/api/data", get(routes::data::get))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
