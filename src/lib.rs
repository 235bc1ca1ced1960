pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::Config;

/// Shared by every handler. Holds configuration only; storage is opened per request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

/// Build the full Axum application router.
///
/// The storage path in `config` does not need to exist yet; the first request
/// to `/` creates the database file. Call [`db::init`] first to fail fast on an
/// unusable location.
pub fn build_app(config: Config) -> Router {
    let state = AppState {
        config: Arc::new(config),
    };

    Router::new()
        .merge(routes::health::router())
        .merge(routes::visits::router())
        .merge(routes::heavy::router())
        .layer(
            TraceLayer::new_for_http()
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
