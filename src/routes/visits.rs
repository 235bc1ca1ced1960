use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::Connection;

use crate::error::AppError;
use crate::models::Visit;
use crate::AppState;

#[derive(Serialize)]
pub struct VisitLog {
    message: String,
    total_visits: usize,
    visits: Vec<Visit>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(handle_index))
}

/// Record this request as a visit, then return the whole log newest first.
async fn handle_index(State(state): State<AppState>) -> Result<Json<VisitLog>, AppError> {
    let mut conn = crate::db::open(&state.config.database_path).await?;

    let id = Visit::record(&mut conn).await?;
    let visits = Visit::all_newest_first(&mut conn).await?;
    conn.close().await?;

    tracing::debug!(visit_id = id, total = visits.len(), "recorded visit");

    Ok(Json(VisitLog {
        message: format!(
            "Hello! This visit was recorded by pod: {}",
            state.config.instance_name
        ),
        total_visits: visits.len(),
        visits,
    }))
}
