//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query and transaction details from service
//!   orchestration.
//!
//! # Invariants
//! - Every repository operation is one transaction: committed on success,
//!   rolled back on every other exit path.
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod counter_repo;
