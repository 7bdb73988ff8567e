use thiserror::Error;

/// Errors produced when validating an entry payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title and content are required")]
    MissingFields,
    #[error("Title is required")]
    MissingTitle,
    #[error("Content is required")]
    MissingContent,
}
