//! Decision repository - CRUD and list queries for decisions

use crate::errors::{from_rusqlite, from_serde, Result};
use decilog_core::model::Decision;
use decilog_core::rules::{validate_decision, DecisionInput};
use decilog_core::DecilogError;
use rusqlite::{params_from_iter, Connection, ToSql};
use tracing::debug;
use uuid::Uuid;

/// Default page size for list queries
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Parameters for listing decisions
#[derive(Debug, Clone)]
pub struct DecisionQuery {
    /// 1-based page number; values below 1 are treated as 1
    pub page: u32,
    pub page_size: u32,
    /// Case-insensitive substring match over title and description
    pub search: Option<String>,
    /// Exact category filter
    pub category: Option<String>,
    /// Exact status filter
    pub status: Option<String>,
}

impl Default for DecisionQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
            category: None,
            status: None,
        }
    }
}

/// One page of list results
#[derive(Debug)]
pub struct DecisionPage {
    pub decisions: Vec<Decision>,
    pub total: u64,
    pub pages: u64,
    pub current_page: u32,
}

/// Repository for decision records
pub struct DecisionRepo;

impl DecisionRepo {
    /// Validate input and persist a new decision with a generated id.
    ///
    /// Returns `ValidationFailed` with the full violation list when the
    /// input is rejected; nothing is written in that case.
    pub fn create(conn: &Connection, input: &DecisionInput) -> Result<Decision> {
        let content = validate_decision(input).map_err(DecilogError::validation)?;
        let decision = Decision::new(Uuid::now_v7().to_string(), content);
        Self::insert(conn, &decision)?;
        debug!(id = %decision.id, "decision created");
        Ok(decision)
    }

    /// Fetch a decision by id
    pub fn get(conn: &Connection, id: &str) -> Result<Decision> {
        Self::find(conn, id)?.ok_or_else(|| DecilogError::DecisionNotFound { id: id.to_string() })
    }

    /// Fetch a decision by id, returning None when absent
    pub fn find(conn: &Connection, id: &str) -> Result<Option<Decision>> {
        let mut stmt = conn
            .prepare("SELECT body FROM decisions WHERE id = ?")
            .map_err(from_rusqlite)?;

        let body: Option<String> = stmt
            .query_row([id], |row| row.get(0))
            .map(Some)
            .or_else(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(from_rusqlite(other)),
            })?;

        match body {
            Some(json) => Ok(Some(serde_json::from_str(&json).map_err(from_serde)?)),
            None => Ok(None),
        }
    }

    /// List decisions newest-first with pagination, search and filters.
    ///
    /// Ordering is by created_at descending with id ascending as the
    /// tie-break, so pages are stable across requests.
    pub fn list(conn: &Connection, query: &DecisionQuery) -> Result<DecisionPage> {
        let mut clauses: Vec<&str> = Vec::new();
        let mut params: Vec<Box<dyn ToSql>> = Vec::new();

        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty());
        if let Some(term) = search {
            let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
            clauses.push(
                "(lower(title) LIKE ? ESCAPE '\\' OR lower(description) LIKE ? ESCAPE '\\')",
            );
            params.push(Box::new(pattern.clone()));
            params.push(Box::new(pattern));
        }
        if let Some(category) = query.category.as_deref().filter(|s| !s.is_empty()) {
            clauses.push("category = ?");
            params.push(Box::new(category.to_string()));
        }
        if let Some(status) = query.status.as_deref().filter(|s| !s.is_empty()) {
            clauses.push("status = ?");
            params.push(Box::new(status.to_string()));
        }

        let where_sql = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };

        let total: i64 = conn
            .query_row(
                &format!("SELECT COUNT(*) FROM decisions{where_sql}"),
                params_from_iter(params.iter().map(|p| p.as_ref())),
                |row| row.get(0),
            )
            .map_err(from_rusqlite)?;
        let total = total as u64;

        let page = query.page.max(1);
        let page_size = query.page_size.max(1);
        let pages = (total + u64::from(page_size) - 1) / u64::from(page_size);
        let offset = u64::from(page - 1) * u64::from(page_size);

        params.push(Box::new(i64::from(page_size)));
        params.push(Box::new(offset as i64));

        let mut stmt = conn
            .prepare(&format!(
                "SELECT body FROM decisions{where_sql} ORDER BY created_at DESC, id ASC LIMIT ? OFFSET ?"
            ))
            .map_err(from_rusqlite)?;
        let bodies: Vec<String> = stmt
            .query_map(params_from_iter(params.iter().map(|p| p.as_ref())), |row| {
                row.get(0)
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        let decisions = bodies
            .iter()
            .map(|json| serde_json::from_str(json).map_err(from_serde))
            .collect::<Result<Vec<Decision>>>()?;

        Ok(DecisionPage {
            decisions,
            total,
            pages,
            current_page: page,
        })
    }

    /// Load every decision newest-first (analytics and similarity pool)
    pub fn list_all(conn: &Connection) -> Result<Vec<Decision>> {
        let mut stmt = conn
            .prepare("SELECT body FROM decisions ORDER BY created_at DESC, id ASC")
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

    /// Apply a partial update to an existing decision.
    ///
    /// Fields absent from the patch keep their stored values; the merged
    /// record is revalidated as a whole before anything is written.
    pub fn update(conn: &Connection, id: &str, patch: &DecisionInput) -> Result<Decision> {
        let mut existing = Self::get(conn, id)?;
        let merged = patch.clone().merged_onto(&existing);
        let content = validate_decision(&merged).map_err(DecilogError::validation)?;
        existing.apply(content);
        Self::persist(conn, &existing)?;
        debug!(id = %existing.id, "decision updated");
        Ok(existing)
    }

    /// Delete a decision by id
    pub fn delete(conn: &Connection, id: &str) -> Result<()> {
        let rows = conn
            .execute("DELETE FROM decisions WHERE id = ?", [id])
            .map_err(from_rusqlite)?;
        if rows == 0 {
            return Err(DecilogError::DecisionNotFound { id: id.to_string() });
        }
        debug!(id, "decision deleted");
        Ok(())
    }

    fn insert(conn: &Connection, decision: &Decision) -> Result<()> {
        let body = serde_json::to_string(decision).map_err(from_serde)?;
        conn.execute(
            "INSERT INTO decisions (id, title, description, category, status, impact_score, created_at, updated_at, body)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params![
                decision.id,
                decision.title,
                decision.description,
                decision.category.as_str(),
                decision.status.as_str(),
                decision.impact_score,
                decision.created_at.timestamp_millis(),
                decision.updated_at.timestamp_millis(),
                body,
            ],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }

    fn persist(conn: &Connection, decision: &Decision) -> Result<()> {
        let body = serde_json::to_string(decision).map_err(from_serde)?;
        conn.execute(
            "UPDATE decisions
             SET title = ?2, description = ?3, category = ?4, status = ?5,
                 impact_score = ?6, updated_at = ?7, body = ?8
             WHERE id = ?1",
            rusqlite::params![
                decision.id,
                decision.title,
                decision.description,
                decision.category.as_str(),
                decision.status.as_str(),
                decision.impact_score,
                decision.updated_at.timestamp_millis(),
                body,
            ],
        )
        .map_err(from_rusqlite)?;
        Ok(())
    }
}

/// Escape LIKE wildcards so search terms match literally
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50%_done"), "50\\%\\_done");
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_default_query() {
        let query = DecisionQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
        assert!(query.search.is_none());
    }
}
