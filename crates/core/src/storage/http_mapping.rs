//! Pure functions for mapping domain errors to HTTP status codes.
//!
//! Following the Functional Core pattern, these have no side effects and
//! know nothing about the HTTP framework.

use super::RepositoryError;
use crate::entry::ValidationError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `InvalidData` -> 400 (Bad Request)
/// - everything else is a store failure -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use entryd_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::entry_not_found(1);
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::InvalidData(_) => 400,
        RepositoryError::ConnectionFailed(_)
        | RepositoryError::QueryFailed(_)
        | RepositoryError::Serialization(_) => 500,
    }
}

/// Maps a [`ValidationError`] to an HTTP status code. Always 400.
pub fn validation_error_to_status_code(_error: &ValidationError) -> u16 {
    400
}
