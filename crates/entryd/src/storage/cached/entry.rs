//! Cached entry repository decorator.
//!
//! Wraps an `EntryRepository` implementation with the cache-aside read path
//! and the write-invalidate path.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use entryd_core::cache::{Cache, Mutation};
use entryd_core::entry::{Entry, EntryId, NewEntry};
use entryd_core::storage::{EntryRepository, Result};

use super::{CacheAside, InvalidationOutcome, Invalidator, Lookup};

/// Cached entry repository decorator.
///
/// - **Reads**: check the cache first, on miss fetch from the repository and
///   populate the cache. Missing entries are not cached.
/// - **Writes**: persist to the repository, then invalidate. A repository
///   error returns early and leaves the cache untouched.
///
/// # Type Parameters
///
/// * `R` - The underlying repository implementation
/// * `C` - The cache implementation
pub struct CachedEntryRepository<R, C>
where
    R: EntryRepository,
    C: Cache,
{
    repository: Arc<R>,
    reads: CacheAside<C>,
    invalidator: Invalidator<C>,
}

impl<R, C> CachedEntryRepository<R, C>
where
    R: EntryRepository,
    C: Cache,
{
    /// Creates a new cached entry repository.
    ///
    /// # Arguments
    ///
    /// * `repository` - The underlying repository to cache
    /// * `cache` - The cache implementation
    /// * `ttl` - Time-to-live for cached values
    pub fn new(repository: Arc<R>, cache: Arc<C>, ttl: Duration) -> Self {
        Self {
            repository,
            reads: CacheAside::new(cache.clone(), ttl),
            invalidator: Invalidator::new(cache),
        }
    }

    /// Total cache invalidations that failed.
    pub fn invalidation_failures(&self) -> u64 {
        self.invalidator.failure_count()
    }

    async fn invalidate(&self, mutation: Mutation) -> InvalidationOutcome {
        let outcome = self.invalidator.invalidate(mutation).await;
        if !outcome.is_clean() {
            tracing::warn!(
                ?mutation,
                failed = outcome.failed,
                attempted = outcome.attempted,
                total_failures = self.invalidation_failures(),
                "Cache may serve stale entries until TTL expiry"
            );
        }
        outcome
    }
}

#[async_trait]
impl<R, C> EntryRepository for CachedEntryRepository<R, C>
where
    R: EntryRepository + 'static,
    C: Cache + 'static,
{
    async fn list_entries(&self) -> Result<Vec<Entry>> {
        if let Lookup::Hit(entries) = self.reads.get_collection().await {
            return Ok(entries);
        }

        let entries = self.repository.list_entries().await?;
        self.reads.put_collection(&entries).await;

        Ok(entries)
    }

    async fn get_entry(&self, id: EntryId) -> Result<Option<Entry>> {
        if let Lookup::Hit(entry) = self.reads.get_entry(id).await {
            return Ok(Some(entry));
        }

        let entry = self.repository.get_entry(id).await?;
        if let Some(ref e) = entry {
            self.reads.put_entry(e).await;
        }

        Ok(entry)
    }

    async fn create_entry(&self, entry: &NewEntry) -> Result<Entry> {
        let created = self.repository.create_entry(entry).await?;
        self.invalidate(Mutation::Created(created.id)).await;

        tracing::debug!(entry_id = created.id, "Entry created");
        Ok(created)
    }

    async fn update_entry(&self, id: EntryId, entry: &NewEntry) -> Result<Entry> {
        let updated = self.repository.update_entry(id, entry).await?;
        self.invalidate(Mutation::Updated(id)).await;

        tracing::debug!(entry_id = id, "Entry updated");
        Ok(updated)
    }

    async fn delete_entry(&self, id: EntryId) -> Result<()> {
        self.repository.delete_entry(id).await?;
        self.invalidate(Mutation::Deleted(id)).await;

        tracing::debug!(entry_id = id, "Entry deleted");
        Ok(())
    }

    async fn delete_all_entries(&self) -> Result<u64> {
        let deleted = self.repository.delete_all_entries().await?;
        self.invalidate(Mutation::Cleared).await;

        tracing::info!(deleted, "All entries deleted");
        Ok(deleted)
    }
}
