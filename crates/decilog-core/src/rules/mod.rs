//! Validation rules
//!
//! Field-level and composite constraint checks for candidate payloads.

pub mod validation;

pub use validation::{
    validate_decision, validate_goal, validate_project, DecisionInput, GoalInput, OutcomesInput,
    ProjectInput, StakeholdersInput, Violation,
};
