//! Counter use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for every counter operation.
//! - Delegate persistence and transaction scoping to the repository.
//!
//! # Invariants
//! - Service APIs never bypass repository resolution/transaction contracts.
//! - Service layer remains storage-agnostic.

use crate::model::counter::{Counter, CounterId};
use crate::repo::counter_repo::{CounterRepository, RepoResult};

/// Use-case service facade for counter operations.
pub struct CounterService<R: CounterRepository> {
    repo: R,
}

impl<R: CounterRepository> CounterService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Resolves the target counter, creating it if absent.
    ///
    /// # Contract
    /// - `None` resolves the default counter (lowest id).
    /// - Performs at most one insert.
    pub fn get_or_create(&self, id: Option<CounterId>) -> RepoResult<Counter> {
        self.repo.get_or_create(id)
    }

    /// Increments the target counter by one and returns the updated row.
    pub fn increment(&self, id: Option<CounterId>) -> RepoResult<Counter> {
        self.repo.increment(id)
    }

    /// Decrements the target counter by one. No floor; values may go
    /// negative.
    pub fn decrement(&self, id: Option<CounterId>) -> RepoResult<Counter> {
        self.repo.decrement(id)
    }

    /// Resets the target counter to zero regardless of prior value.
    pub fn reset(&self, id: Option<CounterId>) -> RepoResult<Counter> {
        self.repo.reset(id)
    }

    /// Convenience read of the resolved counter's value.
    ///
    /// Equivalent to `get_or_create(id)` followed by reading `value`, and
    /// shares its creation side effect on first access.
    pub fn current_value(&self, id: Option<CounterId>) -> RepoResult<i64> {
        Ok(self.repo.get_or_create(id)?.value)
    }
}
