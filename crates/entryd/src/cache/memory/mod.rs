//! In-memory cache backend implementation.
//!
//! Provides a single-process cache using tokio synchronization primitives.
//! Suitable for a single instance; use the `redis` feature when several
//! instances share one store.

mod cache;

pub use cache::MemoryCache;
