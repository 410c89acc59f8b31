pub mod health;

use axum::{routing::get, Router};

use crate::notice::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Notice API
        .route("/generate", get(handlers::handle_generate))
        .route("/generate-hw", get(handlers::handle_generate_hw))
        .with_state(state)
}
