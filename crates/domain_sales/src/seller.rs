//! Seller entity
//!
//! A seller is a plain attribute holder. It belongs to exactly one department,
//! held behind an [`Arc`] so that every seller read in the same query shares
//! one department instance.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use validator::{Validate, ValidationError};

use core_kernel::SellerId;

use crate::department::Department;
use crate::error::SalesError;

/// A seller working for a department
///
/// The id is absent until the seller has been stored; the repository returns
/// a copy carrying the generated key. Equality and hashing consider the id only.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Seller {
    /// Storage-assigned key, `None` before insert
    pub id: Option<SellerId>,
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub birth_date: NaiveDate,
    #[validate(custom(function = "non_negative_salary"))]
    pub base_salary: Decimal,
    pub department: Arc<Department>,
}

fn non_negative_salary(salary: &Decimal) -> Result<(), ValidationError> {
    if salary.is_sign_negative() && !salary.is_zero() {
        return Err(ValidationError::new("non_negative"));
    }
    Ok(())
}

impl Seller {
    /// Creates a new, not yet stored seller
    ///
    /// # Errors
    ///
    /// Returns `SalesError::InvalidSeller` when the name is empty or too long,
    /// the email is malformed, or the salary is negative.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        birth_date: NaiveDate,
        base_salary: Decimal,
        department: Arc<Department>,
    ) -> Result<Self, SalesError> {
        let seller = Self {
            id: None,
            name: name.into(),
            email: email.into(),
            birth_date,
            base_salary,
            department,
        };
        seller
            .validate()
            .map_err(|e| SalesError::from_validation(&e))?;
        Ok(seller)
    }

    /// Returns a copy of this seller carrying the given key
    pub fn with_id(self, id: SellerId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// Whether the seller has been assigned a storage key
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl PartialEq for Seller {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Seller {}

impl Hash for Seller {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Seller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "null".to_string());
        write!(
            f,
            "Seller [id={}, name={}, email={}, birthDate={}, baseSalary={}, department={}]",
            id, self.name, self.email, self.birth_date, self.base_salary, self.department
        )
    }
}
