//! Custom Test Assertions
//!
//! Provides assertion helpers for seller query results that give more
//! meaningful failure messages than standard assertions.

use std::sync::Arc;

use core_kernel::DepartmentId;
use domain_sales::Seller;

/// Asserts that sellers are ordered by name ascending
///
/// # Panics
///
/// Panics at the first adjacent pair that is out of order
pub fn assert_sorted_by_name(sellers: &[Seller]) {
    for pair in sellers.windows(2) {
        assert!(
            pair[0].name <= pair[1].name,
            "Sellers not ordered by name: {:?} comes before {:?}",
            pair[0].name,
            pair[1].name
        );
    }
}

/// Asserts that every seller belongs to the given department
pub fn assert_all_in_department(sellers: &[Seller], department_id: DepartmentId) {
    for seller in sellers {
        assert_eq!(
            seller.department.id, department_id,
            "Seller {:?} belongs to department {}, expected {}",
            seller.name, seller.department.id, department_id
        );
    }
}

/// Asserts that sellers with the same department id hold the same
/// department instance, and sellers with different ids do not
pub fn assert_departments_deduplicated(sellers: &[Seller]) {
    for a in sellers {
        for b in sellers {
            let same_id = a.department.id == b.department.id;
            assert_eq!(
                Arc::ptr_eq(&a.department, &b.department),
                same_id,
                "Department instances of {:?} and {:?} break the identity map (department ids {} and {})",
                a.name,
                b.name,
                a.department.id,
                b.department.id
            );
        }
    }
}

/// Returns the seller names in result order
pub fn names(sellers: &[Seller]) -> Vec<&str> {
    sellers.iter().map(|s| s.name.as_str()).collect()
}
