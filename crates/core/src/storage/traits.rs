use async_trait::async_trait;

use crate::entry::{Entry, EntryId, NewEntry};

use super::Result;

/// Repository for entry operations.
///
/// Implemented by the storage backends and by the cached decorator that
/// wraps them, so handlers never know whether a cache is involved.
#[async_trait]
pub trait EntryRepository: Send + Sync {
    /// Lists every entry, ordered by id.
    async fn list_entries(&self) -> Result<Vec<Entry>>;

    /// Gets an entry by its ID.
    async fn get_entry(&self, id: EntryId) -> Result<Option<Entry>>;

    /// Inserts a new entry and returns it with its store-assigned id.
    async fn create_entry(&self, entry: &NewEntry) -> Result<Entry>;

    /// Replaces the fields of an existing entry.
    ///
    /// Returns `RepositoryError::NotFound` if the entry does not exist.
    async fn update_entry(&self, id: EntryId, entry: &NewEntry) -> Result<Entry>;

    /// Deletes an entry by its ID.
    ///
    /// Returns `RepositoryError::NotFound` if the entry does not exist.
    async fn delete_entry(&self, id: EntryId) -> Result<()>;

    /// Deletes every entry and returns how many were removed.
    async fn delete_all_entries(&self) -> Result<u64>;
}
