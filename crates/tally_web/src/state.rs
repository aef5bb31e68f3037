//! Shared application state for request handlers.
//!
//! # Responsibility
//! - Own the SQLite connection and hand out scoped store access.
//!
//! # Invariants
//! - The connection is held only for the duration of one store call.
//! - Store access is serialized; handlers never share a live transaction.

use rusqlite::Connection;
use std::sync::{Mutex, PoisonError};
use tally_core::{CounterService, SqliteCounterRepository};

/// Application state shared across workers via `web::Data`.
pub struct AppState {
    db: Mutex<Connection>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Mutex::new(conn),
        }
    }

    /// Runs one store operation against a service scoped to the locked
    /// connection.
    pub fn with_store<T>(
        &self,
        op: impl FnOnce(&CounterService<SqliteCounterRepository<'_>>) -> T,
    ) -> T {
        // A poisoned lock only means another handler panicked mid-request;
        // the transaction it held has already rolled back.
        let conn = self.db.lock().unwrap_or_else(PoisonError::into_inner);
        let service = CounterService::new(SqliteCounterRepository::new(&conn));
        op(&service)
    }
}
