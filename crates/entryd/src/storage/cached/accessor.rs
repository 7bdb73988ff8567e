//! Cache-aside read path.

use std::sync::Arc;
use std::time::Duration;

use entryd_core::cache::{
    deserialize_entries, deserialize_entry, serialize_entries, serialize_entry, Cache, CacheKey,
};
use entryd_core::entry::{Entry, EntryId};

/// Result of a cache lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Hit(T),
    Miss,
}

/// Mediates reads between the caller and the cache.
///
/// The accessor never fails. A cache error or an undecodable value is a
/// [`Lookup::Miss`], and a failed write is logged and dropped. "Not found" is
/// never cached.
pub struct CacheAside<C: Cache> {
    cache: Arc<C>,
    ttl: Duration,
}

impl<C: Cache> CacheAside<C> {
    pub fn new(cache: Arc<C>, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    /// Looks up a single entry under `entry:{id}`.
    pub async fn get_entry(&self, id: EntryId) -> Lookup<Entry> {
        let key = CacheKey::Entry(id);
        match self.read(&key).await {
            Some(bytes) => match deserialize_entry(&bytes) {
                Ok(entry) => {
                    tracing::trace!(entry_id = id, "Cache hit for entry");
                    Lookup::Hit(entry)
                }
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "Cache entry deserialization failed");
                    Lookup::Miss
                }
            },
            None => {
                tracing::trace!(entry_id = id, "Cache miss for entry");
                Lookup::Miss
            }
        }
    }

    /// Looks up the entry collection under `entries:all`.
    pub async fn get_collection(&self) -> Lookup<Vec<Entry>> {
        let key = CacheKey::Collection;
        match self.read(&key).await {
            Some(bytes) => match deserialize_entries(&bytes) {
                Ok(entries) => {
                    tracing::trace!(count = entries.len(), "Cache hit for entry collection");
                    Lookup::Hit(entries)
                }
                Err(err) => {
                    tracing::warn!(key = %key, error = %err, "Cache collection deserialization failed");
                    Lookup::Miss
                }
            },
            None => {
                tracing::trace!("Cache miss for entry collection");
                Lookup::Miss
            }
        }
    }

    pub async fn put_entry(&self, entry: &Entry) {
        match serialize_entry(entry) {
            Ok(bytes) => self.write(&CacheKey::Entry(entry.id), &bytes).await,
            Err(err) => tracing::warn!(entry_id = entry.id, error = %err, "Failed to serialize entry"),
        }
    }

    pub async fn put_collection(&self, entries: &[Entry]) {
        match serialize_entries(entries) {
            Ok(bytes) => self.write(&CacheKey::Collection, &bytes).await,
            Err(err) => tracing::warn!(error = %err, "Failed to serialize entry collection"),
        }
    }

    async fn read(&self, key: &CacheKey) -> Option<Vec<u8>> {
        match self.cache.get(&key.as_key()).await {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "Cache read failed, falling back to store");
                None
            }
        }
    }

    async fn write(&self, key: &CacheKey, bytes: &[u8]) {
        if let Err(err) = self.cache.set(&key.as_key(), bytes, Some(self.ttl)).await {
            tracing::warn!(key = %key, error = %err, "Failed to populate cache");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::cached::testing::FailingCache;

    fn entry(id: EntryId) -> Entry {
        Entry {
            id,
            title: format!("title {id}"),
            content: format!("content {id}"),
        }
    }

    fn accessor() -> (Arc<MemoryCache>, CacheAside<MemoryCache>) {
        let cache = Arc::new(MemoryCache::new(100).unwrap());
        let aside = CacheAside::new(cache.clone(), Duration::from_secs(60));
        (cache, aside)
    }

    #[tokio::test]
    async fn test_empty_cache_misses() {
        let (_, aside) = accessor();

        assert_eq!(aside.get_entry(1).await, Lookup::Miss);
        assert_eq!(aside.get_collection().await, Lookup::Miss);
    }

    #[tokio::test]
    async fn test_put_then_get_entry_hits() {
        let (_, aside) = accessor();

        aside.put_entry(&entry(3)).await;

        assert_eq!(aside.get_entry(3).await, Lookup::Hit(entry(3)));
        assert_eq!(aside.get_entry(4).await, Lookup::Miss);
    }

    #[tokio::test]
    async fn test_put_then_get_collection_hits() {
        let (_, aside) = accessor();
        let entries = vec![entry(1), entry(2)];

        aside.put_collection(&entries).await;

        assert_eq!(aside.get_collection().await, Lookup::Hit(entries));
    }

    #[tokio::test]
    async fn test_hit_returns_bytes_as_written() {
        let (cache, aside) = accessor();

        aside.put_entry(&entry(5)).await;
        let stored = cache.get("entry:5").await.unwrap().unwrap();

        assert_eq!(stored, serialize_entry(&entry(5)).unwrap());
    }

    #[tokio::test]
    async fn test_empty_collection_is_cached() {
        let (_, aside) = accessor();

        aside.put_collection(&[]).await;

        assert_eq!(aside.get_collection().await, Lookup::Hit(vec![]));
    }

    #[tokio::test]
    async fn test_corrupt_value_is_a_miss() {
        let (cache, aside) = accessor();
        cache.set("entry:1", b"not json", None).await.unwrap();
        cache.set("entries:all", b"{}", None).await.unwrap();

        assert_eq!(aside.get_entry(1).await, Lookup::Miss);
        assert_eq!(aside.get_collection().await, Lookup::Miss);
    }

    #[tokio::test]
    async fn test_failing_cache_is_a_miss_and_put_is_swallowed() {
        let aside = CacheAside::new(Arc::new(FailingCache::new()), Duration::from_secs(60));

        aside.put_entry(&entry(1)).await;
        aside.put_collection(&[entry(1)]).await;

        assert_eq!(aside.get_entry(1).await, Lookup::Miss);
        assert_eq!(aside.get_collection().await, Lookup::Miss);
    }

    #[tokio::test]
    async fn test_values_expire_after_ttl() {
        let cache = Arc::new(MemoryCache::new(100).unwrap());
        let aside = CacheAside::new(cache, Duration::from_millis(20));

        aside.put_entry(&entry(1)).await;
        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_eq!(aside.get_entry(1).await, Lookup::Miss);
    }
}
