//! Database connection provider
//!
//! The registry works over one live SQLite connection. This module opens and
//! closes it; repositories borrow it for as long as they live.

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::str::FromStr;
use tracing::info;

use crate::error::DbError;

/// Configuration options for the database connection
///
/// # Example
///
/// ```rust
/// use infra_db::DatabaseConfig;
///
/// let config = DatabaseConfig::new("sqlite://registry.db")
///     .create_if_missing(true)
///     .foreign_keys(true);
/// assert!(config.create_if_missing);
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection string, e.g. `sqlite://registry.db` or `sqlite::memory:`
    pub url: String,
    /// Create the database file when it does not exist yet
    pub create_if_missing: bool,
    /// Enforce foreign key constraints on this connection
    pub foreign_keys: bool,
}

impl DatabaseConfig {
    /// Creates a new database configuration with the given connection URL
    ///
    /// # Arguments
    ///
    /// * `url` - SQLite connection string
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            create_if_missing: true,
            foreign_keys: true,
        }
    }

    /// Sets whether a missing database file is created on connect
    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    /// Sets whether foreign keys are enforced
    pub fn foreign_keys(mut self, enforce: bool) -> Self {
        self.foreign_keys = enforce;
        self
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new("sqlite::memory:")
    }
}

/// Opens a single database connection with the given configuration
///
/// # Errors
///
/// Returns `DbError::ConnectionFailed` if the URL is invalid or the database
/// cannot be opened
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::{DatabaseConfig, connect};
///
/// let mut conn = connect(&DatabaseConfig::new("sqlite://registry.db")).await?;
/// ```
pub async fn connect(config: &DatabaseConfig) -> Result<SqliteConnection, DbError> {
    info!(
        url = %config.url,
        foreign_keys = config.foreign_keys,
        "Opening database connection"
    );

    let conn = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
        .create_if_missing(config.create_if_missing)
        .foreign_keys(config.foreign_keys)
        .connect()
        .await
        .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

    info!("Database connection established");
    Ok(conn)
}

/// Closes the connection, flushing any pending work
pub async fn close(conn: SqliteConnection) -> Result<(), DbError> {
    conn.close().await?;
    info!("Database connection closed");
    Ok(())
}
