//! Goal domain model
//!
//! Goals are lightweight aggregates that group decisions by id. Referential
//! integrity is not enforced; decisions may be deleted independently.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::now_millis;

/// Validated goal content
#[derive(Debug, Clone, PartialEq)]
pub struct GoalContent {
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub progress: f64,
    pub decisions: Vec<String>,
}

/// A stored goal record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    /// Unique identifier (UUIDv7)
    pub id: String,

    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,

    /// Completion percentage in [0, 100]
    pub progress: f64,

    /// Associated decision ids
    pub decisions: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new goal record from validated content
    pub fn new(id: String, content: GoalContent) -> Self {
        let now = now_millis();
        Self {
            id,
            title: content.title,
            description: content.description,
            deadline: content.deadline,
            progress: content.progress,
            decisions: content.decisions,
            created_at: now,
            updated_at: now,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Goal({}, title={}, progress={})",
            self.id, self.title, self.progress
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_new_defaults() {
        let goal = Goal::new(
            "g1".to_string(),
            GoalContent {
                title: "Save for a house".to_string(),
                description: None,
                deadline: None,
                progress: 0.0,
                decisions: vec![],
            },
        );

        assert_eq!(goal.id, "g1");
        assert_eq!(goal.progress, 0.0);
        assert!(goal.decisions.is_empty());
        assert_eq!(goal.created_at, goal.updated_at);
    }
}
