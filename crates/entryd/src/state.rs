//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. Handlers only see an `EntryRepository` trait object;
//! the concrete store and the cache in front of it are chosen by feature
//! flags when the state is built.

use std::sync::Arc;

use entryd_core::storage::EntryRepository;

use crate::config::Config;
use crate::storage::cached::CachedEntryRepository;

/// Shared application state.
///
/// Cloned per request. The repository handle is process-wide and is
/// dropped once the server has shut down.
#[derive(Clone)]
pub struct AppState {
    pub entry_repo: Arc<dyn EntryRepository>,
}

impl AppState {
    /// Creates a state around an already-built repository.
    pub fn with_repository(entry_repo: Arc<dyn EntryRepository>) -> Self {
        Self { entry_repo }
    }
}

// ============================================================================
// Feature-specific constructors
// ============================================================================

#[cfg(all(feature = "sqlite", feature = "memory"))]
mod sqlite_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::sqlite::SqliteRepository;

    impl AppState {
        /// Creates a new AppState with SQLite storage and an in-process LRU cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries)?);

            let entry_repo =
                CachedEntryRepository::new(sqlite_repo, memory_cache, config.cache_ttl());

            tracing::info!(
                sqlite_path = %config.sqlite_path,
                cache_max_entries = config.cache_max_entries,
                cache_ttl_seconds = config.cache_ttl_seconds,
                "Initialized SQLite storage with memory cache"
            );

            Ok(Self::with_repository(Arc::new(entry_repo)))
        }
    }
}

#[cfg(all(feature = "sqlite", feature = "redis"))]
mod sqlite_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::sqlite::SqliteRepository;

    impl AppState {
        /// Creates a new AppState with SQLite storage and a Redis cache.
        ///
        /// Redis is connected on first use, so the service starts even when
        /// Redis is down.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url)?);

            let entry_repo =
                CachedEntryRepository::new(sqlite_repo, redis_cache, config.cache_ttl());

            tracing::info!(
                sqlite_path = %config.sqlite_path,
                redis_url = %config.redis_url,
                cache_ttl_seconds = config.cache_ttl_seconds,
                "Initialized SQLite storage with Redis cache"
            );

            Ok(Self::with_repository(Arc::new(entry_repo)))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "memory"))]
mod inmemory_memory {
    use super::*;
    use crate::cache::memory::MemoryCache;
    use crate::storage::inmemory::InMemoryRepository;

    impl AppState {
        /// Creates a new AppState with volatile storage and an in-process LRU cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let memory_cache = Arc::new(MemoryCache::new(config.cache_max_entries)?);

            let entry_repo =
                CachedEntryRepository::new(inmemory_repo, memory_cache, config.cache_ttl());

            tracing::info!(
                cache_max_entries = config.cache_max_entries,
                cache_ttl_seconds = config.cache_ttl_seconds,
                "Initialized in-memory storage with memory cache"
            );

            Ok(Self::with_repository(Arc::new(entry_repo)))
        }
    }
}

#[cfg(all(feature = "inmemory", feature = "redis"))]
mod inmemory_redis {
    use super::*;
    use crate::cache::redis_impl::RedisCache;
    use crate::storage::inmemory::InMemoryRepository;

    impl AppState {
        /// Creates a new AppState with volatile storage and a Redis cache.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let inmemory_repo = Arc::new(InMemoryRepository::new());
            let redis_cache = Arc::new(RedisCache::new(&config.redis_url)?);

            let entry_repo =
                CachedEntryRepository::new(inmemory_repo, redis_cache, config.cache_ttl());

            tracing::info!(
                redis_url = %config.redis_url,
                cache_ttl_seconds = config.cache_ttl_seconds,
                "Initialized in-memory storage with Redis cache"
            );

            Ok(Self::with_repository(Arc::new(entry_repo)))
        }
    }
}

// ============================================================================
// Test support
// ============================================================================
