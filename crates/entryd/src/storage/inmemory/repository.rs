//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use entryd_core::entry::{Entry, EntryId, NewEntry};
use entryd_core::storage::{EntryRepository, RepositoryError, Result};

#[derive(Debug)]
struct Table {
    rows: BTreeMap<EntryId, Entry>,
    /// Last assigned id. Never decreases, so ids are not reused after deletes.
    last_id: EntryId,
}

/// In-memory storage backend.
///
/// Data is not persisted and will be lost when the repository is dropped.
/// Ids start at 1 and increase monotonically, like an `AUTOINCREMENT` key.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    table: Arc<RwLock<Table>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                rows: BTreeMap::new(),
                last_id: 0,
            })),
        }
    }
}

#[async_trait]
impl EntryRepository for InMemoryRepository {
    async fn list_entries(&self) -> Result<Vec<Entry>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn get_entry(&self, id: EntryId) -> Result<Option<Entry>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn create_entry(&self, entry: &NewEntry) -> Result<Entry> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let created = entry.clone().into_entry(table.last_id);
        table.rows.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update_entry(&self, id: EntryId, entry: &NewEntry) -> Result<Entry> {
        let mut table = self.table.write().await;
        let Some(row) = table.rows.get_mut(&id) else {
            return Err(RepositoryError::entry_not_found(id));
        };
        *row = entry.clone().into_entry(id);
        Ok(row.clone())
    }

    async fn delete_entry(&self, id: EntryId) -> Result<()> {
        let mut table = self.table.write().await;
        if table.rows.remove(&id).is_none() {
            return Err(RepositoryError::entry_not_found(id));
        }
        Ok(())
    }

    async fn delete_all_entries(&self) -> Result<u64> {
        let mut table = self.table.write().await;
        let deleted = table.rows.len() as u64;
        table.rows.clear();
        Ok(deleted)
    }
}
