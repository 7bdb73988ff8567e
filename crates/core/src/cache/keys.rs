//! Cache key derivation.
//!
//! Every key the service reads or writes comes from [`CacheKey`], so the
//! accessor and the invalidator can never disagree on naming.

use std::fmt;

use crate::entry::EntryId;

/// Key of the cached entry collection.
pub const COLLECTION_KEY: &str = "entries:all";

const ENTRY_PREFIX: &str = "entry:";

/// A cacheable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// The full entry collection, `entries:all`.
    Collection,
    /// A single entry, `entry:{id}`.
    Entry(EntryId),
}

impl CacheKey {
    /// Returns the string form used by cache backends.
    pub fn as_key(&self) -> String {
        match self {
            CacheKey::Collection => COLLECTION_KEY.to_string(),
            CacheKey::Entry(id) => entry_key(*id),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Collection => f.write_str(COLLECTION_KEY),
            CacheKey::Entry(id) => write!(f, "{ENTRY_PREFIX}{id}"),
        }
    }
}

/// Returns the cache key for a single entry.
pub fn entry_key(id: EntryId) -> String {
    format!("{ENTRY_PREFIX}{id}")
}

/// Returns the pattern matching every per-entry key.
pub fn entry_pattern() -> String {
    format!("{ENTRY_PREFIX}*")
}

/// Returns the Redis Set key for tracking live per-entry keys.
///
/// The set lets `delete_pattern("entry:*")` run without `SCAN`. The `_keys`
/// suffix is not a valid id, so the set never tracks itself.
pub fn entry_tracking_key() -> String {
    format!("{ENTRY_PREFIX}_keys")
}

/// Extracts the entry id from a per-entry key.
///
/// Returns `None` for the collection key, the tracking key, or anything else.
///
/// # Examples
///
/// ```
/// use entryd_core::cache::extract_entry_id_from_key;
///
/// assert_eq!(extract_entry_id_from_key("entry:42"), Some(42));
/// assert_eq!(extract_entry_id_from_key("entries:all"), None);
/// assert_eq!(extract_entry_id_from_key("entry:_keys"), None);
/// ```
pub fn extract_entry_id_from_key(key: &str) -> Option<EntryId> {
    key.strip_prefix(ENTRY_PREFIX)?.parse().ok()
}

/// Checks if a cache key is a per-entry key (e.g., `"entry:42"`).
///
/// These keys are tracked so that delete-all can remove them.
pub fn is_entry_key(key: &str) -> bool {
    extract_entry_id_from_key(key).is_some()
}
