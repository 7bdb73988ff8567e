//! In-memory storage backend.
//!
//! Stores entries in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. Useful for
//! tests and local development where persistence is not required.
//!
//! # Example
//!
//! ```rust,ignore
//! use entryd::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
