//! Seller repository implementation
//!
//! Each operation runs exactly one parameterized statement on the borrowed
//! connection. Finders join `department` and map rows through a fresh
//! [`SellerMapper`], so department instances are shared within one result and
//! never across calls.

use async_trait::async_trait;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::sqlite::SqliteConnection;
use tracing::{field::Empty, instrument, Span};

use core_kernel::SellerId;
use domain_sales::{Department, Seller};

use crate::error::DbError;
use crate::repositories::mapping::{SellerMapper, SellerRow};
use crate::repositories::SellerStore;

/// Repository for sellers over a single SQLite connection
///
/// The repository borrows the connection mutably, so only one statement can
/// be in flight on it at a time.
///
/// # Example
///
/// ```rust,ignore
/// use infra_db::repositories::{SellerRepository, SellerStore};
///
/// let mut repo = SellerRepository::new(&mut conn);
/// let seller = repo.find_by_id(SellerId::new(3)).await?;
/// ```
pub struct SellerRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> SellerRepository<'c> {
    /// Creates a new SellerRepository over the given connection
    ///
    /// # Arguments
    ///
    /// * `conn` - The open connection supplied by the caller
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }
}

fn salary_to_f64(seller: &Seller) -> Result<f64, DbError> {
    let salary: &Decimal = &seller.base_salary;
    salary.to_f64().ok_or_else(|| {
        DbError::Mapping(format!("base salary {} is not representable as a double", salary))
    })
}

#[async_trait]
impl<'c> SellerStore for SellerRepository<'c> {
    #[instrument(level = "debug", skip(self, seller), fields(department_id = %seller.department.id.tagged(), seller_id = Empty))]
    async fn insert(&mut self, seller: Seller) -> Result<Seller, DbError> {
        let base_salary = salary_to_f64(&seller)?;

        let result = sqlx::query(
            r#"
            INSERT INTO seller
                (NAME, EMAIL, BIRTH_DATE, BASE_SALARY, DEPARTMENT_ID)
            VALUES
                (?, ?, ?, ?, ?)
            "#,
        )
        .bind(seller.name.as_str())
        .bind(seller.email.as_str())
        .bind(seller.birth_date)
        .bind(base_salary)
        .bind(seller.department.id.value())
        .execute(&mut *self.conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NoRowsAffected);
        }

        let id = SellerId::try_from(result.last_insert_rowid())
            .map_err(|e| DbError::Mapping(e.to_string()))?;
        Span::current().record("seller_id", id.tagged().as_str());

        Ok(seller.with_id(id))
    }

    #[instrument(level = "debug", skip(self, seller), fields(seller_id = ?seller.id.map(|id| id.tagged()), rows_affected = Empty))]
    async fn update(&mut self, seller: &Seller) -> Result<u64, DbError> {
        let id = seller.id.ok_or(DbError::MissingId("Seller"))?;
        let base_salary = salary_to_f64(seller)?;

        let result = sqlx::query(
            r#"
            UPDATE seller
            SET NAME = ?,
                EMAIL = ?,
                BIRTH_DATE = ?,
                BASE_SALARY = ?,
                DEPARTMENT_ID = ?
            WHERE ID = ?
            "#,
        )
        .bind(seller.name.as_str())
        .bind(seller.email.as_str())
        .bind(seller.birth_date)
        .bind(base_salary)
        .bind(seller.department.id.value())
        .bind(id.value())
        .execute(&mut *self.conn)
        .await?;

        Span::current().record("rows_affected", result.rows_affected());
        Ok(result.rows_affected())
    }

    #[instrument(level = "debug", skip(self), fields(seller_id = %id.tagged(), rows_affected = Empty))]
    async fn delete_by_id(&mut self, id: SellerId) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM seller WHERE ID = ?")
            .bind(id.value())
            .execute(&mut *self.conn)
            .await?;

        Span::current().record("rows_affected", result.rows_affected());
        Ok(result.rows_affected())
    }

    #[instrument(level = "debug", skip(self), fields(seller_id = %id.tagged()))]
    async fn find_by_id(&mut self, id: SellerId) -> Result<Option<Seller>, DbError> {
        let row = sqlx::query_as::<_, SellerRow>(
            r#"
            SELECT seller.*, department.NAME AS DEP_NAME
            FROM seller INNER JOIN department
                ON seller.DEPARTMENT_ID = department.ID
            WHERE seller.ID = ?
            "#,
        )
        .bind(id.value())
        .fetch_optional(&mut *self.conn)
        .await?;

        row.map(|row| SellerMapper::new().map_row(row)).transpose()
    }

    #[instrument(level = "debug", skip(self, department), fields(department_id = %department.id.tagged(), count = Empty))]
    async fn find_by_department(&mut self, department: &Department) -> Result<Vec<Seller>, DbError> {
        let rows = sqlx::query_as::<_, SellerRow>(
            r#"
            SELECT seller.*, department.NAME AS DEP_NAME
            FROM seller INNER JOIN department
                ON seller.DEPARTMENT_ID = department.ID
            WHERE seller.DEPARTMENT_ID = ?
            ORDER BY seller.NAME
            "#,
        )
        .bind(department.id.value())
        .fetch(&mut *self.conn);

        let sellers = SellerMapper::new().collect(rows).await?;
        Span::current().record("count", sellers.len());
        Ok(sellers)
    }

    #[instrument(level = "debug", skip(self), fields(count = Empty))]
    async fn find_all(&mut self) -> Result<Vec<Seller>, DbError> {
        let rows = sqlx::query_as::<_, SellerRow>(
            r#"
            SELECT seller.*, department.NAME AS DEP_NAME
            FROM seller INNER JOIN department
                ON seller.DEPARTMENT_ID = department.ID
            ORDER BY seller.NAME
            "#,
        )
        .fetch(&mut *self.conn);

        let sellers = SellerMapper::new().collect(rows).await?;
        Span::current().record("count", sellers.len());
        Ok(sellers)
    }
}
