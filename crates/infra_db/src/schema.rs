//! Schema setup and reference data
//!
//! The schema is fixed: `department(ID, NAME)` and
//! `seller(ID, NAME, EMAIL, BIRTH_DATE, BASE_SALARY, DEPARTMENT_ID)` with a
//! foreign key from `seller.DEPARTMENT_ID` to `department.ID`.

use sqlx::sqlite::SqliteConnection;
use tracing::info;

use crate::error::DbError;

/// DDL for both tables, safe to run more than once
pub const SCHEMA_SQL: &str = include_str!("../migrations/0001_schema.sql");

/// Reference departments and sellers
pub const SAMPLE_DATA_SQL: &str = include_str!("../migrations/sample_data.sql");

/// Creates the seller and department tables if they do not exist yet
pub async fn create_schema(conn: &mut SqliteConnection) -> Result<(), DbError> {
    sqlx::raw_sql(SCHEMA_SQL)
        .execute(&mut *conn)
        .await
        .map_err(|e| DbError::Schema(e.to_string()))?;

    info!("Schema ready");
    Ok(())
}

/// Loads the reference data set into empty tables
///
/// # Returns
///
/// `true` if the data was loaded, `false` if departments already existed
pub async fn load_sample_data(conn: &mut SqliteConnection) -> Result<bool, DbError> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM department")
        .fetch_one(&mut *conn)
        .await?;

    if existing > 0 {
        info!(existing, "Departments present, skipping sample data");
        return Ok(false);
    }

    sqlx::raw_sql(SAMPLE_DATA_SQL)
        .execute(&mut *conn)
        .await
        .map_err(|e| DbError::Schema(e.to_string()))?;

    info!("Sample data loaded");
    Ok(true)
}
