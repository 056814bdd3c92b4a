//! Database Test Utilities
//!
//! Each [`TestDatabase`] owns its own in-memory SQLite connection, so tests
//! are isolated from each other without any shared container or file.

use sqlx::sqlite::SqliteConnection;

use infra_db::schema::{create_schema, load_sample_data};
use infra_db::{connect, DatabaseConfig, DbError, DepartmentRepository, SellerRepository};

/// A private in-memory database with the registry schema applied
pub struct TestDatabase {
    conn: SqliteConnection,
}

impl TestDatabase {
    /// Opens a database with the schema and the reference data set
    pub async fn new() -> Result<Self, DbError> {
        let mut db = Self::empty().await?;
        load_sample_data(&mut db.conn).await?;
        Ok(db)
    }

    /// Opens a database with the schema and no rows
    pub async fn empty() -> Result<Self, DbError> {
        let mut conn = connect(&DatabaseConfig::default()).await?;
        create_schema(&mut conn).await?;
        Ok(Self { conn })
    }

    /// Returns the underlying connection
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }

    /// Returns a seller repository borrowing this database's connection
    pub fn sellers(&mut self) -> SellerRepository<'_> {
        SellerRepository::new(&mut self.conn)
    }

    /// Returns a department repository borrowing this database's connection
    pub fn departments(&mut self) -> DepartmentRepository<'_> {
        DepartmentRepository::new(&mut self.conn)
    }

    /// Counts the rows of a table
    pub async fn count_rows(&mut self, table: &str) -> Result<i64, DbError> {
        let count = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&mut self.conn)
            .await?;
        Ok(count)
    }

    /// Closes the connection
    pub async fn close(self) -> Result<(), DbError> {
        infra_db::close(self.conn).await
    }
}

/// Helper macro for running database tests against the reference data set
#[macro_export]
macro_rules! db_test {
    ($name:ident, |$db:ident| $body:block) => {
        #[tokio::test]
        async fn $name() {
            #[allow(unused_mut)]
            let mut $db = $crate::database::TestDatabase::new()
                .await
                .expect("Failed to create test database");
            $body
        }
    };
}
