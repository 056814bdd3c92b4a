//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! seller registry test suite.
//!
//! # Modules
//!
//! - `fixtures`: The reference data set and well-known entities
//! - `builders`: Builder patterns for test data construction
//! - `database`: In-memory database helpers
//! - `assertions`: Custom assertion helpers for query results
//! - `generators`: Property-based and fake data generators

pub mod fixtures;
pub mod builders;
pub mod database;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use database::*;
pub use assertions::*;
pub use generators::*;
