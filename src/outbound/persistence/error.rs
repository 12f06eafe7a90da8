//! Shared error classification for the persistence layer.
//!
//! Every repository funnels Diesel and pool failures through this module so
//! all handlers report store failures uniformly instead of leaking
//! driver-specific detail.

use tracing::debug;

use crate::domain::Error;

use super::pool::PoolError;

/// Failure kinds a repository operation can surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistenceError {
    /// Could not obtain or keep a usable connection.
    #[error("database connection error: {0}")]
    Connection(String),

    /// The query itself failed.
    #[error("database query error: {0}")]
    Query(String),

    /// A unique key already holds the inserted value.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),
}

impl From<PoolError> for PersistenceError {
    fn from(error: PoolError) -> Self {
        Self::Connection(error.to_string())
    }
}

impl From<diesel::result::Error> for PersistenceError {
    fn from(error: diesel::result::Error) -> Self {
        use diesel::result::{DatabaseErrorKind, Error as DieselError};

        match &error {
            DieselError::DatabaseError(kind, info) => {
                debug!(?kind, message = info.message(), "diesel operation failed");
            }
            other => debug!(error = %other, "diesel operation failed"),
        }

        match error {
            DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
                Self::UniqueViolation(info.message().to_owned())
            }
            DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
                Self::Connection(info.message().to_owned())
            }
            other => Self::Query(other.to_string()),
        }
    }
}

/// Map store failures to the domain taxonomy.
///
/// Unique violations need caller context to produce a useful conflict
/// message, so callers match those before delegating here.
pub fn map_store_error(error: PersistenceError) -> Error {
    match error {
        PersistenceError::Connection(message) | PersistenceError::Query(message) => {
            Error::internal(message)
        }
        PersistenceError::UniqueViolation(message) => Error::conflict(message),
    }
}
