//! Core types shared across decilog facilities
//!
//! This crate provides the correlation primitives used by the HTTP layer:
//!
//! - **RequestId**: unique identifier attached to every API request

pub mod correlation;

pub use correlation::RequestId;
