//! Test doubles shared by the cache-aside tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use entryd_core::cache::{Cache, CacheError, Result as CacheResult};

/// Cache whose every operation fails, as if the backend were unreachable.
pub struct FailingCache {
    pub calls: AtomicUsize,
}

impl FailingCache {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    fn fail<T>(&self) -> CacheResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CacheError::ConnectionFailed("cache unavailable".to_string()))
    }
}

#[async_trait]
impl Cache for FailingCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<Vec<u8>>> {
        self.fail()
    }

    async fn set(&self, _key: &str, _value: &[u8], _ttl: Option<Duration>) -> CacheResult<()> {
        self.fail()
    }

    async fn delete(&self, _key: &str) -> CacheResult<()> {
        self.fail()
    }

    async fn delete_pattern(&self, _pattern: &str) -> CacheResult<()> {
        self.fail()
    }
}
