//! Database error types
//!
//! Every failure surfaced by the repositories is a [`DbError`]. Driver errors
//! are translated once, in the `From<sqlx::Error>` impl below, and keep the
//! original driver message.

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DbError {
    /// Failed to open the database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Statement execution failed
    #[error("Query failed: {0}")]
    Query(String),

    /// A foreign key, unique, not-null or check constraint rejected the statement
    #[error("Integrity violation: {0}")]
    Integrity(String),

    /// An insert completed without affecting any row
    #[error("Unexpected error! No rows affected!")]
    NoRowsAffected,

    /// The entity has no id, so it cannot address a stored row
    #[error("{0} has no id")]
    MissingId(&'static str),

    /// A stored value cannot be represented in the entity
    #[error("Mapping error: {0}")]
    Mapping(String),

    /// Schema or sample data could not be applied
    #[error("Schema setup failed: {0}")]
    Schema(String),
}

impl DbError {
    /// Creates a mapping error for a column of a given row
    pub fn mapping(column: &str, row_id: impl std::fmt::Display, detail: impl std::fmt::Display) -> Self {
        DbError::Mapping(format!("{} of row {}: {}", column, row_id, detail))
    }

    /// Checks if this error is a constraint violation
    pub fn is_integrity_violation(&self) -> bool {
        matches!(self, DbError::Integrity(_))
    }

    /// Checks if this error reports an insert that affected no rows
    pub fn is_no_rows_affected(&self) -> bool {
        matches!(self, DbError::NoRowsAffected)
    }

    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(self, DbError::ConnectionFailed(_))
    }
}

/// Translates SQLx errors, classifying constraint violations by the
/// driver-reported error kind
impl From<sqlx::Error> for DbError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::Database(db_err) => {
                let message = db_err.message().to_string();
                match db_err.kind() {
                    ErrorKind::UniqueViolation
                    | ErrorKind::ForeignKeyViolation
                    | ErrorKind::NotNullViolation
                    | ErrorKind::CheckViolation => DbError::Integrity(message),
                    _ => DbError::Query(message),
                }
            }
            _ => DbError::Query(error.to_string()),
        }
    }
}
