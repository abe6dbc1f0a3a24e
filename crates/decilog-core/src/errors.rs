use thiserror::Error;

use crate::rules::validation::Violation;

/// Result type alias using DecilogError
pub type Result<T> = std::result::Result<T, DecilogError>;

/// Comprehensive error taxonomy for decilog operations
///
/// Validation problems are always surfaced together as a single
/// `ValidationFailed` carrying the full violation list, so callers can report
/// every offending field at once. Storage faults are wrapped as `Persistence`
/// and surfaced to API clients as opaque 500-class failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecilogError {
    /// One or more fields violated the data model invariants
    #[error("Validation failed")]
    ValidationFailed { violations: Vec<Violation> },

    /// Decision not found in store
    #[error("Decision not found: {id}")]
    DecisionNotFound { id: String },

    /// Goal not found in store
    #[error("Goal not found: {id}")]
    GoalNotFound { id: String },

    /// Project not found in store
    #[error("Project not found: {id}")]
    ProjectNotFound { id: String },

    /// Identifier is not a well-formed UUID
    #[error("Invalid identifier: {id}")]
    InvalidIdentifier { id: String },

    /// Storage/infrastructure failure (catch-all)
    #[error("Persistence error: {message}")]
    Persistence { message: String },
}

impl DecilogError {
    /// Wrap a violation list as a ValidationFailed error
    pub fn validation(violations: Vec<Violation>) -> Self {
        Self::ValidationFailed { violations }
    }

    /// Per-field violation strings, for API error bodies
    ///
    /// Returns an empty vec for non-validation errors.
    pub fn violation_messages(&self) -> Vec<String> {
        match self {
            Self::ValidationFailed { violations } => {
                violations.iter().map(|v| v.to_string()).collect()
            }
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_carries_all_violations() {
        let err = DecilogError::validation(vec![
            Violation::RequiredFieldMissing { field: "title" },
            Violation::EmptyCollection {
                field: "affectedAreas",
            },
        ]);

        let messages = err.violation_messages();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("title"));
        assert!(messages[1].contains("affectedAreas"));
    }

    #[test]
    fn test_not_found_has_no_violations() {
        let err = DecilogError::DecisionNotFound {
            id: "d1".to_string(),
        };
        assert!(err.violation_messages().is_empty());
        assert_eq!(err.to_string(), "Decision not found: d1");
    }
}
