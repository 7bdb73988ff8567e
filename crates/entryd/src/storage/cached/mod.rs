//! Cached repository decorator.
//!
//! Wraps an `EntryRepository` with the cache-aside pattern:
//!
//! - **Reads**: [`CacheAside`] checks the cache first; on a miss the decorator
//!   fetches from the repository and populates the cache
//! - **Writes**: persist to the repository, then [`Invalidator`] removes what
//!   the mutation made stale
//!
//! Cache failures never reach the caller. Reads degrade to the repository,
//! failed invalidations are logged and counted.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let repo = Arc::new(SqliteRepository::new("entries.db").await?);
//! let cache = Arc::new(MemoryCache::new(10_000)?);
//!
//! let cached_repo = CachedEntryRepository::new(repo, cache, Duration::from_secs(60));
//! ```

mod accessor;
mod entry;
mod invalidator;

#[cfg(test)]
pub(crate) mod testing;

pub use accessor::{CacheAside, Lookup};
pub use entry::CachedEntryRepository;
pub use invalidator::{InvalidationOutcome, Invalidator};
