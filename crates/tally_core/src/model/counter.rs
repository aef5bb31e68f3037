//! Counter domain model.
//!
//! # Responsibility
//! - Define the persisted counter record and its identity type.
//! - Validate timestamp invariants before rows cross the persistence
//!   boundary in either direction.
//!
//! # Invariants
//! - `id` is assigned by storage on insert and never reassigned.
//! - `value` is a plain signed integer with no floor or ceiling.
//! - `updated_at >= created_at` for the whole record lifetime.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Storage-assigned identifier for a counter row.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CounterId = i64;

/// Canonical persisted counter record.
///
/// Instances always reflect a committed row: storage assigns `id`, and
/// mutation paths read the row back after update before returning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    /// Stable row identity, assigned by storage on insert.
    pub id: CounterId,
    /// Current counter value. Negative values are legal.
    pub value: i64,
    /// Unix epoch milliseconds, set once at creation.
    pub created_at: i64,
    /// Unix epoch milliseconds, refreshed on every mutation.
    pub updated_at: i64,
}

/// Validation failures for counter records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterValidationError {
    /// A timestamp predates the Unix epoch.
    NegativeTimestamp(i64),
    /// `updated_at` is earlier than `created_at`.
    TimestampOrder { created_at: i64, updated_at: i64 },
}

impl Display for CounterValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeTimestamp(value) => {
                write!(f, "timestamp {value} predates the unix epoch")
            }
            Self::TimestampOrder {
                created_at,
                updated_at,
            } => write!(
                f,
                "updated_at {updated_at} is earlier than created_at {created_at}"
            ),
        }
    }
}

impl Error for CounterValidationError {}

impl Counter {
    /// Checks record-level invariants.
    ///
    /// Called by the repository on every read-back so invalid persisted
    /// state is rejected instead of masked.
    pub fn validate(&self) -> Result<(), CounterValidationError> {
        if self.created_at < 0 {
            return Err(CounterValidationError::NegativeTimestamp(self.created_at));
        }
        if self.updated_at < 0 {
            return Err(CounterValidationError::NegativeTimestamp(self.updated_at));
        }
        if self.updated_at < self.created_at {
            return Err(CounterValidationError::TimestampOrder {
                created_at: self.created_at,
                updated_at: self.updated_at,
            });
        }
        Ok(())
    }
}

/// Current wall-clock time as Unix epoch milliseconds.
///
/// Saturates to 0 for clocks set before the epoch rather than panicking;
/// mutation paths additionally clamp so `updated_at` never moves backwards.
pub fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0)
}
