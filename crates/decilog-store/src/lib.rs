//! Decilog Store - SQLite persistence for decisions, goals and projects
//!
//! Provides:
//! - SQLite schema with a checksummed migrations framework
//! - Repository layer bridging the domain models to persistence
//! - List queries with pagination, substring search and exact filters
//!
//! Records are stored document-style: the full serialized record lives in a
//! `body` JSON column, with the fields needed for ordering and filtering
//! duplicated into indexed columns.

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::{DecisionPage, DecisionQuery, DecisionRepo, GoalRepo, ProjectRepo};
