//! Decoding helpers shared by the SQLite repositories.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use crate::infrastructure::ports::RepoError;

pub(super) fn text(row: &SqliteRow, column: &str) -> Result<String, RepoError> {
    row.try_get(column)
        .map_err(|e| RepoError::serialization(format!("{column}: {e}")))
}

pub(super) fn optional_text(row: &SqliteRow, column: &str) -> Result<Option<String>, RepoError> {
    row.try_get(column)
        .map_err(|e| RepoError::serialization(format!("{column}: {e}")))
}

pub(super) fn real(row: &SqliteRow, column: &str) -> Result<f64, RepoError> {
    row.try_get(column)
        .map_err(|e| RepoError::serialization(format!("{column}: {e}")))
}

/// Any domain id built from a UUID.
pub(super) fn id<T: From<Uuid>>(row: &SqliteRow, column: &str) -> Result<T, RepoError> {
    let raw = text(row, column)?;
    Uuid::parse_str(&raw)
        .map(T::from)
        .map_err(|e| RepoError::serialization(format!("{column} '{raw}': {e}")))
}

pub(super) fn timestamp(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>, RepoError> {
    let raw = text(row, column)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| RepoError::serialization(format!("{column} '{raw}': {e}")))
}

/// Any value with a fallible `FromStr`: enums and validated names.
pub(super) fn parsed<T>(row: &SqliteRow, column: &str) -> Result<T, RepoError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = text(row, column)?;
    raw.parse()
        .map_err(|e| RepoError::serialization(format!("{column} '{raw}': {e}")))
}

/// Write errors: foreign-key failures are constraint violations, the rest database errors.
pub(super) fn write_error(operation: &'static str, e: sqlx::Error) -> RepoError {
    match &e {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            RepoError::constraint(format!("{operation}: {}", db.message()))
        }
        _ => RepoError::database(operation, e),
    }
}
