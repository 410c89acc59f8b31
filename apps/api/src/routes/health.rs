use axum::Json;
use serde_json::{json, Value};

pub const ROOT_MESSAGE: &str =
    "Diary API is running! Use /generate (no hw) or /generate-hw (with hw)";

/// GET /
pub async fn root_handler() -> &'static str {
    ROOT_MESSAGE
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "diary-api"
    }))
}
