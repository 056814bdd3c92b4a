//! Repository implementations for the sales entities
//!
//! Repositories encapsulate SQL and map between database rows and domain
//! types. Each one borrows the caller's connection and runs exactly one
//! statement per operation; nothing is cached between calls.
//!
//! The store traits are the seam callers program against; the SQLite
//! repositories are their only implementations in this crate.

use async_trait::async_trait;

use core_kernel::{DepartmentId, SellerId};
use domain_sales::{Department, Seller};

use crate::error::DbError;

pub mod mapping;
pub mod seller;
pub mod department;

pub use seller::SellerRepository;
pub use department::DepartmentRepository;
pub use mapping::{DepartmentIdentityMap, SellerMapper, SellerRow};

/// CRUD operations over sellers
#[async_trait]
pub trait SellerStore: Send {
    /// Stores a new seller and returns it with the generated id set
    ///
    /// # Errors
    ///
    /// `DbError::NoRowsAffected` if the insert affected no rows, or the
    /// translated driver error
    async fn insert(&mut self, seller: Seller) -> Result<Seller, DbError>;

    /// Overwrites the stored attributes of the seller with the same id
    ///
    /// Returns the number of affected rows; an unknown id is not an error.
    async fn update(&mut self, seller: &Seller) -> Result<u64, DbError>;

    /// Deletes the seller with the given id, if any
    async fn delete_by_id(&mut self, id: SellerId) -> Result<u64, DbError>;

    /// Finds one seller with its department, `None` when no row matches
    async fn find_by_id(&mut self, id: SellerId) -> Result<Option<Seller>, DbError>;

    /// Lists the sellers of a department ordered by name
    ///
    /// Only the department id is used. All returned sellers share one
    /// department instance.
    async fn find_by_department(&mut self, department: &Department) -> Result<Vec<Seller>, DbError>;

    /// Lists all sellers ordered by name
    async fn find_all(&mut self) -> Result<Vec<Seller>, DbError>;
}

/// CRUD operations over departments
#[async_trait]
pub trait DepartmentStore: Send {
    /// Stores a new department and returns it with the generated id
    async fn insert(&mut self, name: &str) -> Result<Department, DbError>;

    /// Renames the department with the same id
    async fn update(&mut self, department: &Department) -> Result<u64, DbError>;

    /// Deletes the department with the given id, if any
    ///
    /// # Errors
    ///
    /// `DbError::Integrity` while sellers still reference the department
    async fn delete_by_id(&mut self, id: DepartmentId) -> Result<u64, DbError>;

    /// Finds one department, `None` when no row matches
    async fn find_by_id(&mut self, id: DepartmentId) -> Result<Option<Department>, DbError>;

    /// Lists all departments ordered by name
    async fn find_all(&mut self) -> Result<Vec<Department>, DbError>;
}
