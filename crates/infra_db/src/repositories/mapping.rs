//! Row-to-entity mapping for seller queries
//!
//! Every seller query joins `department` and returns the seller columns plus
//! the department name aliased as `DEP_NAME`. Rows are mapped through a
//! [`SellerMapper`], which owns a per-call identity map so that all sellers of
//! one department share a single `Arc<Department>`.

use chrono::NaiveDate;
use futures::{Stream, TryStreamExt};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use core_kernel::{DepartmentId, SellerId};
use domain_sales::{Department, Seller};

use crate::error::DbError;

/// Database row for a seller joined with its department name
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SellerRow {
    #[sqlx(rename = "ID")]
    pub id: i32,
    #[sqlx(rename = "NAME")]
    pub name: String,
    #[sqlx(rename = "EMAIL")]
    pub email: String,
    #[sqlx(rename = "BIRTH_DATE")]
    pub birth_date: NaiveDate,
    #[sqlx(rename = "BASE_SALARY")]
    pub base_salary: f64,
    #[sqlx(rename = "DEPARTMENT_ID")]
    pub department_id: i32,
    #[sqlx(rename = "DEP_NAME")]
    pub department_name: Option<String>,
}

/// Keyed lookup of departments already built during one mapping pass
#[derive(Debug, Default)]
pub struct DepartmentIdentityMap {
    departments: HashMap<DepartmentId, Arc<Department>>,
}

impl DepartmentIdentityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared department for `id`, building it on first encounter
    pub fn resolve(&mut self, id: DepartmentId, name: Option<&str>) -> Arc<Department> {
        self.departments
            .entry(id)
            .or_insert_with(|| {
                Arc::new(Department {
                    id,
                    name: name.map(str::to_owned),
                })
            })
            .clone()
    }

    /// Number of distinct departments seen so far
    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }
}

/// Maps joined seller rows to entities for one query call
#[derive(Debug, Default)]
pub struct SellerMapper {
    departments: DepartmentIdentityMap,
}

impl SellerMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps one row, reusing the department if it was already seen
    pub fn map_row(&mut self, row: SellerRow) -> Result<Seller, DbError> {
        let department = self.departments.resolve(
            DepartmentId::new(row.department_id),
            row.department_name.as_deref(),
        );
        instantiate_seller(row, department)
    }

    /// Drains a row stream, mapping rows in storage order
    ///
    /// The stream is consumed and dropped before returning, on success and on
    /// the first error alike.
    pub async fn collect<S>(mut self, mut rows: S) -> Result<Vec<Seller>, DbError>
    where
        S: Stream<Item = Result<SellerRow, sqlx::Error>> + Unpin,
    {
        let mut sellers = Vec::new();
        while let Some(row) = rows.try_next().await? {
            sellers.push(self.map_row(row)?);
        }
        Ok(sellers)
    }

    /// Number of distinct departments built by this mapper
    pub fn department_count(&self) -> usize {
        self.departments.len()
    }
}

fn instantiate_seller(row: SellerRow, department: Arc<Department>) -> Result<Seller, DbError> {
    let base_salary = Decimal::try_from(row.base_salary)
        .map_err(|e| DbError::mapping("BASE_SALARY", row.id, e))?;

    Ok(Seller {
        id: Some(SellerId::new(row.id)),
        name: row.name,
        email: row.email,
        birth_date: row.birth_date,
        base_salary,
        department,
    })
}
