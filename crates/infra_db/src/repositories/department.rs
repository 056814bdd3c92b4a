//! Department repository implementation

use async_trait::async_trait;
use sqlx::sqlite::SqliteConnection;
use tracing::{field::Empty, instrument, Span};

use core_kernel::DepartmentId;
use domain_sales::Department;

use crate::error::DbError;
use crate::repositories::DepartmentStore;

/// Database row for department
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DepartmentRow {
    #[sqlx(rename = "ID")]
    pub id: i32,
    #[sqlx(rename = "NAME")]
    pub name: String,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Department::new(DepartmentId::new(row.id), row.name)
    }
}

/// Repository for departments over a single SQLite connection
pub struct DepartmentRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> DepartmentRepository<'c> {
    /// Creates a new DepartmentRepository over the given connection
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl<'c> DepartmentStore for DepartmentRepository<'c> {
    #[instrument(level = "debug", skip(self), fields(department_id = Empty))]
    async fn insert(&mut self, name: &str) -> Result<Department, DbError> {
        let result = sqlx::query("INSERT INTO department (NAME) VALUES (?)")
            .bind(name)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NoRowsAffected);
        }

        let id = DepartmentId::try_from(result.last_insert_rowid())
            .map_err(|e| DbError::Mapping(e.to_string()))?;
        Span::current().record("department_id", id.tagged().as_str());

        Ok(Department::new(id, name))
    }

    #[instrument(level = "debug", skip(self, department), fields(department_id = %department.id.tagged(), rows_affected = Empty))]
    async fn update(&mut self, department: &Department) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE department SET NAME = ? WHERE ID = ?")
            .bind(department.name.as_deref())
            .bind(department.id.value())
            .execute(&mut *self.conn)
            .await?;

        Span::current().record("rows_affected", result.rows_affected());
        Ok(result.rows_affected())
    }

    #[instrument(level = "debug", skip(self), fields(department_id = %id.tagged(), rows_affected = Empty))]
    async fn delete_by_id(&mut self, id: DepartmentId) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM department WHERE ID = ?")
            .bind(id.value())
            .execute(&mut *self.conn)
            .await?;

        Span::current().record("rows_affected", result.rows_affected());
        Ok(result.rows_affected())
    }

    #[instrument(level = "debug", skip(self), fields(department_id = %id.tagged()))]
    async fn find_by_id(&mut self, id: DepartmentId) -> Result<Option<Department>, DbError> {
        let row = sqlx::query_as::<_, DepartmentRow>("SELECT * FROM department WHERE ID = ?")
            .bind(id.value())
            .fetch_optional(&mut *self.conn)
            .await?;

        Ok(row.map(Department::from))
    }

    #[instrument(level = "debug", skip(self), fields(count = Empty))]
    async fn find_all(&mut self) -> Result<Vec<Department>, DbError> {
        let rows = sqlx::query_as::<_, DepartmentRow>("SELECT * FROM department ORDER BY NAME")
            .fetch_all(&mut *self.conn)
            .await?;

        Span::current().record("count", rows.len());
        Ok(rows.into_iter().map(Department::from).collect())
    }
}
