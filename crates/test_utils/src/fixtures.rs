//! Pre-built Test Fixtures
//!
//! Mirrors the reference data set loaded by `infra_db::schema::load_sample_data`
//! so tests can refer to well-known rows by name instead of magic numbers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

use core_kernel::{DepartmentId, SellerId};
use domain_sales::{Department, Seller};

/// Department keys of the reference data set
pub struct DepartmentFixtures;

impl DepartmentFixtures {
    pub const COMPUTERS: DepartmentId = DepartmentId::new(1);
    pub const ELECTRONICS: DepartmentId = DepartmentId::new(2);
    pub const FASHION: DepartmentId = DepartmentId::new(3);
    pub const BOOKS: DepartmentId = DepartmentId::new(4);

    /// Key that is never present in the reference data
    pub const UNKNOWN: DepartmentId = DepartmentId::new(99);

    /// Number of departments in the reference data
    pub const COUNT: usize = 4;

    /// Lookup key for the Electronics department
    pub fn electronics_ref() -> Department {
        Department::reference(Self::ELECTRONICS)
    }
}

/// Seller keys and attributes of the reference data set
pub struct SellerFixtures;

impl SellerFixtures {
    pub const BOB_BROWN: SellerId = SellerId::new(1);
    pub const MARIA_GREEN: SellerId = SellerId::new(2);
    pub const ALEX_GREY: SellerId = SellerId::new(3);
    pub const MARTHA_RED: SellerId = SellerId::new(4);
    pub const DONALD_BLUE: SellerId = SellerId::new(5);
    pub const ALEX_PINK: SellerId = SellerId::new(6);

    /// Key that is never present in the reference data
    pub const UNKNOWN: SellerId = SellerId::new(999);

    /// Number of sellers in the reference data
    pub const COUNT: usize = 6;

    /// All reference seller names in ascending order
    pub fn names_sorted() -> Vec<&'static str> {
        vec![
            "Alex Grey",
            "Alex Pink",
            "Bob Brown",
            "Donald Blue",
            "Maria Green",
            "Martha Red",
        ]
    }

    /// The not yet stored seller "Greg" of the Electronics department
    pub fn greg() -> Seller {
        Seller {
            id: None,
            name: "Greg".to_string(),
            email: "greg@gmail.com".to_string(),
            birth_date: DateFixtures::greg_birth_date(),
            base_salary: dec!(4000.0),
            department: Arc::new(DepartmentFixtures::electronics_ref()),
        }
    }
}

/// Fixture for date test data
pub struct DateFixtures;

impl DateFixtures {
    pub fn greg_birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1995, 6, 21).expect("valid date")
    }

    pub fn default_birth_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 1, 15).expect("valid date")
    }
}

/// Fixture for salary test data
pub struct SalaryFixtures;

impl SalaryFixtures {
    pub fn standard() -> Decimal {
        dec!(3000)
    }

    pub fn zero() -> Decimal {
        Decimal::ZERO
    }
}
