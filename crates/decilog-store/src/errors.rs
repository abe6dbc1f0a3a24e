//! Error handling for decilog-store
//!
//! Wraps decilog-core's DecilogError with store-specific helpers

use decilog_core::DecilogError;

/// Result type alias using DecilogError
pub type Result<T> = std::result::Result<T, DecilogError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> DecilogError {
    DecilogError::Persistence {
        message: err.to_string(),
    }
}

/// Create a serialization error for a corrupt stored body
pub fn from_serde(err: serde_json::Error) -> DecilogError {
    DecilogError::Persistence {
        message: format!("corrupt stored record: {err}"),
    }
}

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> DecilogError {
    DecilogError::Persistence {
        message: format!("Migration {migration_id} failed: {reason}"),
    }
}
