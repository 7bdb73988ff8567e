use serde::{Deserialize, Serialize};

/// Store-assigned entry identifier.
pub type EntryId = i64;

/// A persisted entry.
///
/// The serialized form is `{"id":..,"title":..,"content":..}` and is what
/// both the HTTP API and the cache carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub content: String,
}

impl Entry {
    /// Creates an entry from a store-assigned id and validated fields.
    pub fn from_new(id: EntryId, new_entry: NewEntry) -> Self {
        Self {
            id,
            title: new_entry.title,
            content: new_entry.content,
        }
    }
}

/// Validated fields for an insert or update.
///
/// Only constructed through [`EntryPayload::validate`](super::EntryPayload::validate)
/// or [`NewEntry::new`], so `title` and `content` are never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub title: String,
    pub content: String,
}

impl NewEntry {
    /// Creates a new entry payload, rejecting blank fields.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, super::ValidationError> {
        super::EntryPayload {
            title: Some(title.into()),
            content: Some(content.into()),
        }
        .validate()
    }

    /// Attaches a store-assigned id.
    pub fn into_entry(self, id: EntryId) -> Entry {
        Entry::from_new(id, self)
    }
}
