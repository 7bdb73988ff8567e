//! Functional core for entryd.
//!
//! Domain types, request validation, cache key derivation, invalidation
//! planning and the storage/cache traits. Nothing in this crate performs I/O.

pub mod cache;
pub mod entry;
pub mod serde;
pub mod storage;
