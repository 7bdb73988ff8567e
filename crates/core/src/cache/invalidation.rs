//! Invalidation planning.
//!
//! Maps a store mutation to the cache keys and patterns it makes stale.
//! Executing the plan is the shell's job; this module only decides.

use crate::entry::EntryId;

use super::{entry_pattern, CacheKey};

/// A successful store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// A new entry was inserted with this id.
    Created(EntryId),
    /// An existing entry was updated.
    Updated(EntryId),
    /// An existing entry was deleted.
    Deleted(EntryId),
    /// Every entry was deleted.
    Cleared,
}

/// Cache keys and patterns to remove after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidationPlan {
    pub keys: Vec<CacheKey>,
    pub patterns: Vec<String>,
}

impl InvalidationPlan {
    /// Number of delete operations the plan issues.
    pub fn len(&self) -> usize {
        self.keys.len() + self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Returns what a mutation invalidates.
///
/// The collection key is always stale after a mutation. A per-entry key is
/// stale when that entry changed or disappeared. Ids are never reused, so a
/// create cannot leave a stale `entry:{id}` behind.
///
/// # Examples
///
/// ```
/// use entryd_core::cache::{invalidation_plan, CacheKey, Mutation};
///
/// let plan = invalidation_plan(Mutation::Updated(7));
/// assert_eq!(plan.keys, vec![CacheKey::Collection, CacheKey::Entry(7)]);
/// assert!(plan.patterns.is_empty());
/// ```
pub fn invalidation_plan(mutation: Mutation) -> InvalidationPlan {
    match mutation {
        Mutation::Created(_) => InvalidationPlan {
            keys: vec![CacheKey::Collection],
            patterns: Vec::new(),
        },
        Mutation::Updated(id) | Mutation::Deleted(id) => InvalidationPlan {
            keys: vec![CacheKey::Collection, CacheKey::Entry(id)],
            patterns: Vec::new(),
        },
        Mutation::Cleared => InvalidationPlan {
            keys: vec![CacheKey::Collection],
            patterns: vec![entry_pattern()],
        },
    }
}
