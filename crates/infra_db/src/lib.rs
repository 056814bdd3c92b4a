//! Infrastructure Database Layer
//!
//! This crate provides data access for the seller registry on SQLite using
//! SQLx.
//!
//! # Architecture
//!
//! The crate follows the repository pattern. Callers open one connection with
//! [`connect`], apply the schema, and hand the connection to a repository,
//! which borrows it for its lifetime.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{connect, schema, DatabaseConfig};
//! use infra_db::repositories::{SellerRepository, SellerStore};
//!
//! let mut conn = connect(&DatabaseConfig::new("sqlite://registry.db")).await?;
//! schema::create_schema(&mut conn).await?;
//!
//! let mut sellers = SellerRepository::new(&mut conn);
//! let everyone = sellers.find_all().await?;
//! ```

pub mod connection;
pub mod error;
pub mod schema;
pub mod repositories;

pub use connection::{close, connect, DatabaseConfig};
pub use error::DbError;
pub use repositories::{DepartmentRepository, DepartmentStore, SellerRepository, SellerStore};
