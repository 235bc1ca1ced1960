use std::hint::black_box;
use std::time::Instant;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::error::AppError;
use crate::AppState;

#[derive(Serialize)]
pub struct LoadReport {
    message: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/heavy", get(handle_heavy))
}

/// Square every integer below `iterations` and throw the result away.
fn burn_cpu(iterations: u64) {
    for i in 0..iterations {
        let _ = black_box(i.wrapping_mul(i));
    }
}

async fn handle_heavy(State(state): State<AppState>) -> Result<Json<LoadReport>, AppError> {
    let iterations = state.config.heavy_iterations;
    let started = Instant::now();

    // Keep the async workers free while the loop runs.
    tokio::task::spawn_blocking(move || burn_cpu(iterations)).await?;

    tracing::debug!(iterations, elapsed = ?started.elapsed(), "cpu load generated");

    Ok(Json(LoadReport {
        message: format!("CPU load generated on pod: {}", state.config.instance_name),
    }))
}
