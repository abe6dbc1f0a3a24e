//! Domain models for decilog
//!
//! Decisions are the core tracked entity; Goals and Projects are lightweight
//! aggregates that reference decisions by id.

mod decision;
mod goal;
mod project;

pub use decision::{
    now_millis, AffectedArea, Category, Decision, DecisionContent, DecisionStatus, Outcomes,
    Stakeholders,
};
pub use goal::{Goal, GoalContent};
pub use project::{Project, ProjectContent};
