//! Goal repository - create and list goals

use crate::errors::{from_rusqlite, from_serde, Result};
use decilog_core::model::Goal;
use decilog_core::rules::{validate_goal, GoalInput};
use decilog_core::DecilogError;
use rusqlite::Connection;
use tracing::debug;
use uuid::Uuid;

/// Repository for goal records
pub struct GoalRepo;

impl GoalRepo {
    /// Validate input and persist a new goal with a generated id
    pub fn create(conn: &Connection, input: &GoalInput) -> Result<Goal> {
        let content = validate_goal(input).map_err(DecilogError::validation)?;
        let goal = Goal::new(Uuid::now_v7().to_string(), content);
        let body = serde_json::to_string(&goal).map_err(from_serde)?;
        conn.execute(
            "INSERT INTO goals (id, title, created_at, updated_at, body) VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                goal.id,
                goal.title,
                goal.created_at.timestamp_millis(),
                goal.updated_at.timestamp_millis(),
                body,
            ],
        )
        .map_err(from_rusqlite)?;
        debug!(id = %goal.id, "goal created");
        Ok(goal)
    }

    /// Fetch a goal by id
    pub fn get(conn: &Connection, id: &str) -> Result<Goal> {
        let mut stmt = conn
            .prepare("SELECT body FROM goals WHERE id = ?")
            .map_err(from_rusqlite)?;
        let body: String = stmt.query_row([id], |row| row.get(0)).map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => DecilogError::GoalNotFound {
                id: id.to_string(),
            },
            other => from_rusqlite(other),
        })?;
        serde_json::from_str(&body).map_err(from_serde)
    }

    /// List all goals newest-first
    pub fn list(conn: &Connection) -> Result<Vec<Goal>> {
        let mut stmt = conn
            .prepare("SELECT body FROM goals ORDER BY created_at DESC, id ASC")
            .map_err(from_rusqlite)?;
        let bodies: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        bodies
            .iter()
            .map(|json| serde_json::from_str(json).map_err(from_serde))
            .collect()
    }
}
