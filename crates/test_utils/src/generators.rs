//! Property-Based and Fake Test Generators
//!
//! Provides proptest strategies and `fake`-backed factories for seller data
//! that respects the entity invariants.

use chrono::NaiveDate;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::sync::Arc;

use core_kernel::DepartmentId;
use domain_sales::{Department, Seller};

/// Strategy for generating non-negative whole salaries
///
/// Whole amounts survive the round trip through the double column exactly.
pub fn salary_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000i64).prop_map(Decimal::from)
}

/// Strategy for generating seller names of letters and spaces
pub fn seller_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,10} [A-Z][a-z]{1,12}"
}

/// Strategy for generating birth dates between 1950 and 2005
pub fn birth_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1950i32..2006, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).expect("day 1-28 exists in every month")
    })
}

/// Builds a random, not yet stored seller for the given department
pub fn fake_seller(department_id: DepartmentId) -> Seller {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    let year: i32 = (1950..2006).fake();
    let month: u32 = (1..13).fake();
    let day: u32 = (1..29).fake();
    let salary: i64 = (1000..9000).fake();

    Seller {
        id: None,
        name,
        email,
        birth_date: NaiveDate::from_ymd_opt(year, month, day).expect("day 1-28 exists in every month"),
        base_salary: Decimal::from(salary),
        department: Arc::new(Department::reference(department_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_fake_seller_is_valid() {
        for _ in 0..20 {
            let seller = fake_seller(DepartmentId::new(1));
            assert!(seller.validate().is_ok(), "invalid fake seller: {:?}", seller);
        }
    }

    proptest! {
        #[test]
        fn prop_salaries_are_non_negative(salary in salary_strategy()) {
            prop_assert!(!salary.is_sign_negative());
        }
    }
}
