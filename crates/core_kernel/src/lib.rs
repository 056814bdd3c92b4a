//! Core Kernel - Foundational types shared by the seller registry crates
//!
//! This crate provides the building blocks used across the workspace:
//! - Integer identifiers for storage-assigned keys
//! - The kernel error type

pub mod identifiers;
pub mod error;

pub use identifiers::{SellerId, DepartmentId};
pub use error::CoreError;
