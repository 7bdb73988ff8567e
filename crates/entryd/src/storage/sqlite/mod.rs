//! SQLite storage backend implementation.
//!
//! Implements [`EntryRepository`](entryd_core::storage::EntryRepository)
//! using `rusqlite` for synchronous operations and `tokio-rusqlite` to run
//! them off the async runtime on a dedicated thread.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
