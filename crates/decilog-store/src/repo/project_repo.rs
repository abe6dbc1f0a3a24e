//! Project repository - create and list projects

use crate::errors::{from_rusqlite, from_serde, Result};
use decilog_core::model::Project;
use decilog_core::rules::{validate_project, ProjectInput};
use decilog_core::DecilogError;
use rusqlite::Connection;
use tracing::debug;
use uuid::Uuid;

/// Repository for project records
pub struct ProjectRepo;

impl ProjectRepo {
    /// Validate input and persist a new project with a generated id
    pub fn create(conn: &Connection, input: &ProjectInput) -> Result<Project> {
        let content = validate_project(input).map_err(DecilogError::validation)?;
        let project = Project::new(Uuid::now_v7().to_string(), content);
        let body = serde_json::to_string(&project).map_err(from_serde)?;
        conn.execute(
            "INSERT INTO projects (id, name, created_at, updated_at, body) VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                project.id,
                project.name,
                project.created_at.timestamp_millis(),
                project.updated_at.timestamp_millis(),
                body,
            ],
        )
        .map_err(from_rusqlite)?;
        debug!(id = %project.id, "project created");
        Ok(project)
    }

    /// Fetch a project by id
    pub fn get(conn: &Connection, id: &str) -> Result<Project> {
        let mut stmt = conn
            .prepare("SELECT body FROM projects WHERE id = ?")
            .map_err(from_rusqlite)?;
        let body: String = stmt.query_row([id], |row| row.get(0)).map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => DecilogError::ProjectNotFound {
                id: id.to_string(),
            },
            other => from_rusqlite(other),
        })?;
        serde_json::from_str(&body).map_err(from_serde)
    }

    /// List all projects newest-first
    pub fn list(conn: &Connection) -> Result<Vec<Project>> {
        let mut stmt = conn
            .prepare("SELECT body FROM projects ORDER BY created_at DESC, id ASC")
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
