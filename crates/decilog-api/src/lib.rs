//! Decilog API - HTTP surface over the decision store
//!
//! Provides:
//! - REST routes under `/api` for decisions, goals, projects and analytics
//! - Error mapping from the domain taxonomy to HTTP status codes
//! - Per-request correlation ids feeding a tracing span

pub mod error;
pub mod request_id;
pub mod routes;
pub mod state;

pub use routes::api_router;
pub use state::AppState;
