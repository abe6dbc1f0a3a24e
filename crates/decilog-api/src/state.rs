//! Shared application state for HTTP handlers

use rusqlite::Connection;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

/// Handler state: a single SQLite connection behind an async mutex.
///
/// SQLite serializes writers anyway, so one guarded connection keeps the
/// handlers simple without giving up correctness.
#[derive(Clone)]
pub struct AppState {
    conn: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wrap an opened, migrated connection for sharing across handlers
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Acquire the connection for the duration of one handler call
    pub async fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().await
    }
}
