//! Router setup and configuration

use axum::{routing::get, routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::api::state::AppState;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Receipt endpoints
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/all", get(handlers::list_receipts))
        .route("/receipts/:id/points", get(handlers::get_points))
        // Health
        .route("/health", get(handlers::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
