use thiserror::Error;

use crate::entry::EntryId;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Shorthand for a missing entry.
    pub fn entry_not_found(id: EntryId) -> Self {
        RepositoryError::NotFound {
            entity_type: "Entry",
            id: id.to_string(),
        }
    }

    /// Returns true for `NotFound`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RepositoryError::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::NotFound {
            entity_type: "Entry",
            id: "12".to_string(),
        };
        assert_eq!(error.to_string(), "Entry not found: 12");
    }

    #[test]
    fn test_entry_not_found_shorthand() {
        let error = RepositoryError::entry_not_found(3);
        assert_eq!(error.to_string(), "Entry not found: 3");
        assert!(error.is_not_found());
    }

    #[test]
    fn test_repository_error_connection_failed_display() {
        let error = RepositoryError::ConnectionFailed("database is locked".to_string());
        assert_eq!(error.to_string(), "Connection failed: database is locked");
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_repository_error_query_failed_display() {
        let error = RepositoryError::QueryFailed("no such table: entries".to_string());
        assert_eq!(error.to_string(), "Query failed: no such table: entries");
    }

    #[test]
    fn test_repository_error_serialization_display() {
        let error = RepositoryError::Serialization("invalid column type".to_string());
        assert_eq!(error.to_string(), "Serialization error: invalid column type");
    }

    #[test]
    fn test_repository_error_invalid_data_display() {
        let error = RepositoryError::InvalidData("title is NULL".to_string());
        assert_eq!(error.to_string(), "Invalid data: title is NULL");
    }
}
