//! Redis cache backend implementation.
//!
//! Provides a cache shared by every instance of the service. The connection
//! is opened lazily, so the service starts (and serves from the store) while
//! Redis is unreachable.

mod cache;
mod error;

pub use cache::RedisCache;
