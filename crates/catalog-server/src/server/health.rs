use axum::Json;
use serde_json::{json, Value};

/// Liveness of the gateway itself. Deliberately does not probe the upstream
/// catalog: an unhealthy upstream surfaces per-request, not here.
pub(super) async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
