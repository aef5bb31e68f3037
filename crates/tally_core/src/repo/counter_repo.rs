//! Counter repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Resolve the target counter (explicit id, default, or fresh insert).
//! - Run every mutation as one read-modify-write transaction.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `get_or_create` performs at most one insert per call.
//! - The default counter is the row with the lowest id, an explicit policy
//!   rather than storage default ordering.
//! - Mutations re-read the resolved row inside their own transaction; a row
//!   that vanished in between surfaces as `NotFound`.
//! - Read paths reject invalid persisted state instead of masking it.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::db::DbError;
use crate::model::counter::{now_epoch_ms, Counter, CounterId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const COUNTER_SELECT_SQL: &str = "SELECT id, value, created_at, updated_at FROM counters";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for counter persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(CounterId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "counter not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted counter data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for counter resolution and mutation.
///
/// Every operation takes an optional identifier; `None` targets the default
/// counter.
pub trait CounterRepository {
    fn get_or_create(&self, id: Option<CounterId>) -> RepoResult<Counter>;
    fn get_counter(&self, id: CounterId) -> RepoResult<Option<Counter>>;
    fn increment(&self, id: Option<CounterId>) -> RepoResult<Counter>;
    fn decrement(&self, id: Option<CounterId>) -> RepoResult<Counter>;
    fn reset(&self, id: Option<CounterId>) -> RepoResult<Counter>;
}

/// SQLite-backed counter repository.
pub struct SqliteCounterRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCounterRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Runs one read-modify-write mutation as a single transaction.
    ///
    /// Resolution may insert the row; the subsequent re-read observes state
    /// committed under this transaction and is the point where an
    /// externally deleted row surfaces as `NotFound`.
    fn mutate(&self, id: Option<CounterId>, mutation: Mutation) -> RepoResult<Counter> {
        let tx = self.conn.unchecked_transaction()?;

        let resolved = resolve_or_insert(&tx, id)?;
        let current =
            select_by_id(&tx, resolved.id)?.ok_or(RepoError::NotFound(resolved.id))?;

        // Clamp so updated_at never moves backwards under wall-clock steps.
        let updated_at = now_epoch_ms().max(current.updated_at);
        let changed = tx.execute(
            "UPDATE counters SET value = ?1, updated_at = ?2 WHERE id = ?3;",
            params![mutation.apply(current.value), updated_at, current.id],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound(current.id));
        }

        let updated =
            select_by_id(&tx, current.id)?.ok_or(RepoError::NotFound(current.id))?;
        tx.commit()?;
        Ok(updated)
    }
}

impl CounterRepository for SqliteCounterRepository<'_> {
    fn get_or_create(&self, id: Option<CounterId>) -> RepoResult<Counter> {
        let tx = self.conn.unchecked_transaction()?;
        let counter = resolve_or_insert(&tx, id)?;
        tx.commit()?;
        Ok(counter)
    }

    fn get_counter(&self, id: CounterId) -> RepoResult<Option<Counter>> {
        select_by_id(self.conn, id)
    }

    fn increment(&self, id: Option<CounterId>) -> RepoResult<Counter> {
        self.mutate(id, Mutation::Increment)
    }

    fn decrement(&self, id: Option<CounterId>) -> RepoResult<Counter> {
        self.mutate(id, Mutation::Decrement)
    }

    fn reset(&self, id: Option<CounterId>) -> RepoResult<Counter> {
        self.mutate(id, Mutation::Reset)
    }
}

#[derive(Debug, Clone, Copy)]
enum Mutation {
    Increment,
    Decrement,
    Reset,
}

impl Mutation {
    fn apply(self, value: i64) -> i64 {
        match self {
            Self::Increment => value + 1,
            Self::Decrement => value - 1,
            Self::Reset => 0,
        }
    }
}

/// Resolves the target counter, inserting a fresh row when nothing matches.
///
/// Resolution order: explicit id match, then lowest-id default when no id
/// was given, then insert. An explicit id that matches nothing falls
/// through to creation of a fresh row with a new id.
fn resolve_or_insert(conn: &Connection, id: Option<CounterId>) -> RepoResult<Counter> {
    match id {
        Some(id) => {
            if let Some(counter) = select_by_id(conn, id)? {
                return Ok(counter);
            }
        }
        None => {
            if let Some(counter) = select_default(conn)? {
                return Ok(counter);
            }
        }
    }

    let now = now_epoch_ms();
    conn.execute(
        "INSERT INTO counters (value, created_at, updated_at) VALUES (0, ?1, ?1);",
        params![now],
    )?;
    let id = conn.last_insert_rowid();

    // Read the persisted row back so callers always receive committed state.
    select_by_id(conn, id)?.ok_or(RepoError::NotFound(id))
}

fn select_by_id(conn: &Connection, id: CounterId) -> RepoResult<Option<Counter>> {
    let mut stmt = conn.prepare(&format!("{COUNTER_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_counter_row(row)?));
    }
    Ok(None)
}

fn select_default(conn: &Connection) -> RepoResult<Option<Counter>> {
    let mut stmt = conn.prepare(&format!("{COUNTER_SELECT_SQL} ORDER BY id ASC LIMIT 1;"))?;
    let mut rows = stmt.query([])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_counter_row(row)?));
    }
    Ok(None)
}

fn parse_counter_row(row: &Row<'_>) -> RepoResult<Counter> {
    let counter = Counter {
        id: row.get("id")?,
        value: row.get("value")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    };
    counter.validate().map_err(|err| {
        RepoError::InvalidData(format!("counter {}: {err}", counter.id))
    })?;
    Ok(counter)
}
