//! Sales Domain
//!
//! Entities of the seller registry: departments and the sellers that belong
//! to them. Both are plain attribute holders; persistence lives in `infra_db`.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use core_kernel::DepartmentId;
//! use domain_sales::{Department, Seller};
//!
//! let department = Arc::new(Department::reference(DepartmentId::new(2)));
//! let seller = Seller::new(
//!     "Greg",
//!     "greg@gmail.com",
//!     NaiveDate::from_ymd_opt(1991, 3, 14).unwrap(),
//!     dec!(4000),
//!     department,
//! )
//! .unwrap();
//!
//! assert!(!seller.is_persisted());
//! ```

pub mod department;
pub mod seller;
pub mod error;

pub use department::Department;
pub use seller::Seller;
pub use error::SalesError;
