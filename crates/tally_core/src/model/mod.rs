//! Domain model for the persisted counter.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep identity and timestamp invariants in one place.
//!
//! # Invariants
//! - Every counter is identified by a storage-assigned `CounterId`.
//! - Counters are never deleted by core code.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod counter;
