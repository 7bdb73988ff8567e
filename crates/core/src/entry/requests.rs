//! API request types for entry writes.
//!
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::{Deserialize, Serialize};

use super::{NewEntry, ValidationError};
use crate::serde::deserialize_optional_string;

/// Request body for `POST /api/entries` and `PUT /api/entries/{id}`.
///
/// Both fields are optional at parse time so that a missing field becomes a
/// validation error instead of a body rejection. Blank strings count as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPayload {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub content: Option<String>,
}

impl EntryPayload {
    /// Validates the payload into a [`NewEntry`].
    pub fn validate(self) -> Result<NewEntry, ValidationError> {
        let title = self.title.filter(|s| !s.trim().is_empty());
        let content = self.content.filter(|s| !s.trim().is_empty());

        match (title, content) {
            (Some(title), Some(content)) => Ok(NewEntry { title, content }),
            (None, None) => Err(ValidationError::MissingFields),
            (None, Some(_)) => Err(ValidationError::MissingTitle),
            (Some(_), None) => Err(ValidationError::MissingContent),
        }
    }
}
