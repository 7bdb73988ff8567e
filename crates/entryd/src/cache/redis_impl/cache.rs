//! Redis cache implementation.
//!
//! Uses set-based key tracking for efficient pattern deletion without SCAN.
//! Per-entry keys (`entry:{id}`) are tracked in the `entry:_keys` set.
//!
//! # Non-Atomicity Safety
//!
//! `set`, `delete` and `delete_pattern` issue several commands. Partial
//! failure leaves at most a stale member in the tracking set, which is
//! harmless: DEL and SREM on missing keys are no-ops, and the next
//! `delete_pattern` removes it.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use redis::AsyncCommands;
use tokio::sync::OnceCell;

use entryd_core::cache::{
    entry_tracking_key, is_entry_key, pattern_matches, Cache, CacheError, Result,
};

use super::error::map_redis_error;

/// How long a single connection attempt may take before the cache is
/// treated as unavailable for the current request.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// How long to skip connection attempts after one fails.
const RECONNECT_BACKOFF: Duration = Duration::from_secs(5);

/// Redis cache backend using a connection manager for reconnects.
pub struct RedisCache {
    client: redis::Client,
    conn: OnceCell<ConnectionManager>,
    /// While set and in the future, operations fail fast without connecting.
    retry_after: Mutex<Option<Instant>>,
    reconnect_backoff: Duration,
}

impl RedisCache {
    /// Creates a Redis cache without connecting.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `CacheError::ConnectionFailed` only if the URL is invalid.
    pub fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)
            .map_err(|e| CacheError::ConnectionFailed(format!("invalid Redis URL: {e}")))?;
        Ok(Self {
            client,
            conn: OnceCell::new(),
            retry_after: Mutex::new(None),
            reconnect_backoff: RECONNECT_BACKOFF,
        })
    }

    #[cfg(test)]
    fn with_reconnect_backoff(mut self, backoff: Duration) -> Self {
        self.reconnect_backoff = backoff;
        self
    }

    /// Creates a Redis cache and connects immediately.
    #[cfg(test)]
    pub async fn connect(url: &str) -> Result<Self> {
        let cache = Self::new(url)?;
        cache.connection().await?;
        Ok(cache)
    }

    /// Returns the shared connection, opening it on first use.
    ///
    /// A failed attempt leaves the cell empty and starts a backoff window.
    /// Inside the window operations fail immediately, so a Redis outage
    /// costs one connect timeout per window instead of one per operation.
    async fn connection(&self) -> Result<ConnectionManager> {
        if let Some(conn) = self.conn.get() {
            return Ok(conn.clone());
        }

        if self.in_backoff() {
            return Err(CacheError::ConnectionFailed(
                "Redis unavailable, waiting for reconnect backoff".to_string(),
            ));
        }

        let config = ConnectionManagerConfig::new()
            .set_connection_timeout(CONNECT_TIMEOUT)
            .set_number_of_retries(1);

        let result = self
            .conn
            .get_or_try_init(move || async move {
                let conn = ConnectionManager::new_with_config(self.client.clone(), config).await?;
                tracing::info!("Connected to Redis");
                Ok::<_, redis::RedisError>(conn)
            })
            .await
            .cloned()
            .map_err(map_redis_error);

        if let Err(err) = &result {
            tracing::warn!(
                error = %err,
                backoff_ms = self.reconnect_backoff.as_millis() as u64,
                "Redis connection failed"
            );
            self.set_retry_after(Some(Instant::now() + self.reconnect_backoff));
        } else {
            self.set_retry_after(None);
        }

        result
    }

    fn in_backoff(&self) -> bool {
        let Ok(guard) = self.retry_after.lock() else {
            return false;
        };
        let retry_after = *guard;
        retry_after.is_some_and(|deadline| Instant::now() < deadline)
    }

    fn set_retry_after(&self, deadline: Option<Instant>) {
        if let Ok(mut guard) = self.retry_after.lock() {
            *guard = deadline;
        }
    }
}

#[async_trait]
impl Cache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.connection().await?;
        let result: Option<Vec<u8>> = conn.get(key).await.map_err(map_redis_error)?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let mut conn = self.connection().await?;

        match ttl {
            Some(duration) => {
                let seconds = duration.as_secs().max(1);
                conn.set_ex::<_, _, ()>(key, value, seconds)
                    .await
                    .map_err(map_redis_error)?;
            }
            None => {
                conn.set::<_, _, ()>(key, value)
                    .await
                    .map_err(map_redis_error)?;
            }
        }

        if is_entry_key(key) {
            conn.sadd::<_, _, ()>(entry_tracking_key(), key)
                .await
                .map_err(map_redis_error)?;
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.connection().await?;

        conn.del::<_, ()>(key).await.map_err(map_redis_error)?;

        if is_entry_key(key) {
            conn.srem::<_, _, ()>(entry_tracking_key(), key)
                .await
                .map_err(map_redis_error)?;
        }

        Ok(())
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<()> {
        // Only per-entry keys are tracked; anything else would need SCAN.
        if !pattern.starts_with("entry:") {
            return Err(CacheError::OperationFailed(format!(
                "pattern {pattern} is not covered by key tracking"
            )));
        }

        let mut conn = self.connection().await?;
        let tracking_key = entry_tracking_key();

        let tracked_keys: Vec<String> = conn
            .smembers(&tracking_key)
            .await
            .map_err(map_redis_error)?;

        let keys_to_delete: Vec<&String> = tracked_keys
            .iter()
            .filter(|k| pattern_matches(pattern, k))
            .collect();

        if !keys_to_delete.is_empty() {
            conn.del::<_, ()>(&keys_to_delete)
                .await
                .map_err(map_redis_error)?;

            conn.srem::<_, _, ()>(&tracking_key, &keys_to_delete)
                .await
                .map_err(map_redis_error)?;
        }

        tracing::trace!(pattern, deleted = keys_to_delete.len(), "Deleted keys by pattern");
        Ok(())
    }
}
