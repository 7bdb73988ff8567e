//! Write-invalidate path.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use entryd_core::cache::{invalidation_plan, Cache, Mutation};

/// What an invalidation run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidationOutcome {
    /// Delete operations issued.
    pub attempted: usize,
    /// Delete operations that failed.
    pub failed: usize,
}

impl InvalidationOutcome {
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Removes the cache keys a store mutation made stale.
///
/// A failed delete leaves a stale value behind until its TTL runs out. It is
/// logged at `warn` and counted, and never fails the request.
pub struct Invalidator<C: Cache> {
    cache: Arc<C>,
    failures: AtomicU64,
}

impl<C: Cache> Invalidator<C> {
    pub fn new(cache: Arc<C>) -> Self {
        Self {
            cache,
            failures: AtomicU64::new(0),
        }
    }

    /// Total failed deletes since construction.
    pub fn failure_count(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    /// Executes the invalidation plan for `mutation`.
    pub async fn invalidate(&self, mutation: Mutation) -> InvalidationOutcome {
        let plan = invalidation_plan(mutation);
        let mut outcome = InvalidationOutcome {
            attempted: plan.len(),
            failed: 0,
        };

        for key in &plan.keys {
            if let Err(err) = self.cache.delete(&key.as_key()).await {
                tracing::warn!(?mutation, key = %key, error = %err, "Failed to invalidate cache key");
                outcome.failed += 1;
            }
        }

        for pattern in &plan.patterns {
            if let Err(err) = self.cache.delete_pattern(pattern).await {
                tracing::warn!(?mutation, pattern = %pattern, error = %err, "Failed to invalidate cache pattern");
                outcome.failed += 1;
            }
        }

        if outcome.failed > 0 {
            self.failures
                .fetch_add(outcome.failed as u64, Ordering::Relaxed);
        } else {
            tracing::trace!(?mutation, attempted = outcome.attempted, "Cache invalidated");
        }

        outcome
    }
}
