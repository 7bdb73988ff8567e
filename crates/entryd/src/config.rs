use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
///
/// The listener address and log format come from the CLI (see `main.rs`).
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds (default: 60)
    pub cache_ttl_seconds: u64,
    /// Maximum number of memory cache entries (default: 10,000)
    #[allow(dead_code)]
    pub cache_max_entries: usize,
    /// Path to SQLite database file (default: "entries.db")
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
    /// Origin allowed by CORS. `None` allows any origin.
    pub allowed_origin: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 60)
    /// - `CACHE_MAX_ENTRIES` - Maximum memory cache entries (default: 10,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "entries.db")
    /// - `REDIS_URL` - Redis connection URL, otherwise built from
    ///   `REDIS_HOST` (default: "localhost") and `REDIS_PORT` (default: 6379)
    /// - `ALLOWED_ORIGIN` - CORS origin (default: any)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// Unparsable numbers fall back to their defaults. Empty strings count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let redis_url = var("REDIS_URL").unwrap_or_else(|| {
            let host = var("REDIS_HOST").unwrap_or_else(|| "localhost".to_string());
            let port = var("REDIS_PORT")
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(6379);
            format!("redis://{host}:{port}")
        });

        Self {
            cache_ttl_seconds: var("CACHE_TTL_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            cache_max_entries: var("CACHE_MAX_ENTRIES")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),
            sqlite_path: var("SQLITE_PATH").unwrap_or_else(|| "entries.db".to_string()),
            redis_url,
            allowed_origin: var("ALLOWED_ORIGIN"),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
