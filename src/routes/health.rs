use axum::{routing::get, Router};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Liveness probe. Never touches storage.
async fn health() -> &'static str {
    "ok"
}
