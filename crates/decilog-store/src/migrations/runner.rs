//! Migration runner

use crate::errors::{from_rusqlite, migration_error, Result};
use crate::migrations::embedded::{get_migrations, Migration};
use rusqlite::Connection;
use sha2::{Digest, Sha256};

/// Bring the database up to the current schema.
///
/// Already-applied migrations are skipped, so calling this on every startup
/// is safe. Each migration runs inside its own transaction and is recorded
/// in `schema_version` together with a checksum of its SQL.
pub fn apply_migrations(conn: &mut Connection) -> Result<()> {
    ensure_schema_version_table(conn)?;

    for migration in get_migrations() {
        apply_one(conn, &migration)?;
    }

    Ok(())
}

fn ensure_schema_version_table(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            id INTEGER PRIMARY KEY,
            migration_id TEXT NOT NULL UNIQUE,
            applied_at INTEGER NOT NULL,
            checksum TEXT
        )",
        [],
    )
    .map_err(from_rusqlite)?;

    Ok(())
}

fn apply_one(conn: &mut Connection, migration: &Migration) -> Result<()> {
    let already_applied: bool = conn
        .query_row(
            "SELECT 1 FROM schema_version WHERE migration_id = ?",
            [migration.id],
            |_| Ok(true),
        )
        .unwrap_or(false);
    if already_applied {
        return Ok(());
    }

    let tx = conn.transaction().map_err(from_rusqlite)?;

    tx.execute_batch(migration.sql)
        .map_err(|e| migration_error(migration.id, &e.to_string()))?;

    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) VALUES (?, ?, ?)",
        rusqlite::params![migration.id, now, checksum(migration.sql)],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;
    Ok(())
}

/// SHA256 of the migration SQL, hex-encoded
fn checksum(sql: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(sql.as_bytes());
    hex::encode(hasher.finalize())
}
