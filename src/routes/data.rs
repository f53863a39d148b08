//! Static data endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct DataResponse {
    pub message: &'static str,
}

/// GET /api/data — returns the static data payload.
///
/// Stateless and idempotent: the payload is built fresh on every call
/// and is identical across calls.
pub async fn get() -> Json<DataResponse> {
    Json(DataResponse {
        message: "Hello from Python backend!",
    })
}
