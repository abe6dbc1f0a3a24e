//! Decilog Core - Domain models and pure decision logic
//!
//! This crate provides the foundational data structures and operations for
//! decilog, including:
//! - Decision, Goal and Project models with typed enumerations
//! - Field-level validation producing complete violation lists
//! - Analytics aggregation (counts, risk buckets, monthly trends)
//! - The weighted similarity heuristic with a pluggable scorer
//!
//! Everything here is pure and store-agnostic; persistence lives in
//! `decilog-store` and the HTTP surface in `decilog-api`.

pub mod analytics;
pub mod errors;
pub mod logging;
pub mod model;
pub mod rules;
pub mod similarity;

// Re-export commonly used types
pub use errors::{DecilogError, Result};
pub use model::{AffectedArea, Category, Decision, DecisionStatus, Goal, Project};
pub use rules::validation::{DecisionInput, GoalInput, ProjectInput, Violation};
