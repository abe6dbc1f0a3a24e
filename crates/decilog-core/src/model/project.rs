//! Project domain model
//!
//! Projects mirror goals but carry a `name` and a team-size counter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::now_millis;

/// Validated project content
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectContent {
    pub name: String,
    pub description: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub progress: f64,
    pub team: i64,
    pub decisions: Vec<String>,
}

/// A stored project record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier (UUIDv7)
    pub id: String,

    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,

    /// Completion percentage in [0, 100]
    pub progress: f64,
    /// Team size counter
    pub team: i64,

    /// Associated decision ids
    pub decisions: Vec<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project record from validated content
    pub fn new(id: String, content: ProjectContent) -> Self {
        let now = now_millis();
        Self {
            id,
            name: content.name,
            description: content.description,
            deadline: content.deadline,
            progress: content.progress,
            team: content.team,
            decisions: content.decisions,
            created_at: now,
            updated_at: now,
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Project({}, name={}, progress={})",
            self.id, self.name, self.progress
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_new_defaults() {
        let project = Project::new(
            "p1".to_string(),
            ProjectContent {
                name: "Kitchen remodel".to_string(),
                description: Some("Full renovation".to_string()),
                deadline: None,
                progress: 25.0,
                team: 2,
                decisions: vec!["d1".to_string()],
            },
        );

        assert_eq!(project.name, "Kitchen remodel");
        assert_eq!(project.team, 2);
        assert_eq!(project.decisions, vec!["d1".to_string()]);
    }
}
