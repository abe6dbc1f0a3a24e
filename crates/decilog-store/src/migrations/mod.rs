//! Schema migrations
//!
//! SQL migrations are embedded at compile time and applied once each, in
//! order, with a SHA256 checksum recorded alongside every applied id.

mod embedded;
mod runner;

pub use runner::apply_migrations;
