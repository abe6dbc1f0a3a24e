//! HTTP routes
//!
//! All endpoints live under `/api`; see the individual modules for handlers.

pub mod analytics;
pub mod decisions;
pub mod goals;
pub mod projects;

use axum::middleware;
use axum::routing::get;
use axum::Router;

use crate::request_id::attach_request_id;
use crate::state::AppState;

/// Health check endpoint
async fn health() -> &'static str {
    "OK"
}

/// Build the full API router
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route(
            "/api/decisions",
            get(decisions::list).post(decisions::create),
        )
        .route(
            "/api/decisions/:id",
            get(decisions::fetch)
                .patch(decisions::update)
                .delete(decisions::remove),
        )
        .route("/api/decisions/:id/similar", get(decisions::similar))
        .route("/api/analytics", get(analytics::summary))
        .route("/api/goals", get(goals::list).post(goals::create))
        .route("/api/projects", get(projects::list).post(projects::create))
        .layer(middleware::from_fn(attach_request_id))
        .with_state(state)
}
