//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;

use core_kernel::{DepartmentId, SellerId};
use domain_sales::{Department, SalesError, Seller};

use crate::fixtures::{DateFixtures, DepartmentFixtures, SalaryFixtures};

/// Builder for constructing test sellers
pub struct TestSellerBuilder {
    id: Option<SellerId>,
    name: String,
    email: String,
    birth_date: NaiveDate,
    base_salary: Decimal,
    department: Arc<Department>,
}

impl Default for TestSellerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSellerBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: None,
            name: "Test Seller".to_string(),
            email: "test.seller@example.com".to_string(),
            birth_date: DateFixtures::default_birth_date(),
            base_salary: SalaryFixtures::standard(),
            department: Arc::new(Department::reference(DepartmentFixtures::COMPUTERS)),
        }
    }

    /// Sets the seller ID
    pub fn with_id(mut self, id: SellerId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the name, deriving a matching email
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self.email = format!(
            "{}@example.com",
            self.name.to_lowercase().replace(' ', ".")
        );
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the birth date
    pub fn with_birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = date;
        self
    }

    /// Sets the base salary
    pub fn with_base_salary(mut self, salary: Decimal) -> Self {
        self.base_salary = salary;
        self
    }

    /// Sets the department by key
    pub fn in_department(mut self, id: DepartmentId) -> Self {
        self.department = Arc::new(Department::reference(id));
        self
    }

    /// Builds the seller without validation
    pub fn build(self) -> Seller {
        Seller {
            id: self.id,
            name: self.name,
            email: self.email,
            birth_date: self.birth_date,
            base_salary: self.base_salary,
            department: self.department,
        }
    }

    /// Builds the seller through the validating constructor
    pub fn build_validated(self) -> Result<Seller, SalesError> {
        let seller = Seller::new(
            self.name,
            self.email,
            self.birth_date,
            self.base_salary,
            self.department,
        )?;
        Ok(match self.id {
            Some(id) => seller.with_id(id),
            None => seller,
        })
    }
}
