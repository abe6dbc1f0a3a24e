//! Repository layer - bridges domain models to SQLite persistence

mod decision_repo;
mod goal_repo;
mod project_repo;

pub use decision_repo::{DecisionPage, DecisionQuery, DecisionRepo, DEFAULT_PAGE_SIZE};
pub use goal_repo::GoalRepo;
pub use project_repo::ProjectRepo;
