//! Integration tests for the seller repository
//!
//! Every test runs against its own in-memory SQLite database.

use std::sync::Arc;

use rust_decimal_macros::dec;

use core_kernel::{DepartmentId, SellerId};
use domain_sales::Department;
use infra_db::{DbError, DepartmentStore, SellerStore};
use test_utils::{
    assert_all_in_department, assert_departments_deduplicated, assert_sorted_by_name, db_test,
    fake_seller, names, DateFixtures, DepartmentFixtures, SalaryFixtures, SellerFixtures,
    TestDatabase, TestSellerBuilder,
};

// ============================================================================
// insert
// ============================================================================

mod insert_tests {
    use super::*;

    db_test!(test_insert_sets_generated_id, |db| {
        let inserted = db.sellers().insert(SellerFixtures::greg()).await.unwrap();

        let id = inserted.id.expect("generated key");
        assert!(id.value() > 0);
        assert_eq!(id, SellerId::new(7));
    });

    db_test!(test_inserted_seller_is_found_by_id, |db| {
        let mut sellers = db.sellers();
        let inserted = sellers.insert(SellerFixtures::greg()).await.unwrap();
        let found = sellers
            .find_by_id(inserted.id.unwrap())
            .await
            .unwrap()
            .expect("seller stored");

        assert_eq!(found.name, "Greg");
        assert_eq!(found.email, "greg@gmail.com");
        assert_eq!(found.base_salary, dec!(4000.0));
        assert_eq!(found.birth_date, inserted.birth_date);
        assert_eq!(found.department.id, DepartmentFixtures::ELECTRONICS);
        assert_eq!(found.department.name.as_deref(), Some("Electronics"));
    });

    db_test!(test_insert_keeps_caller_attributes, |db| {
        let greg = SellerFixtures::greg();
        let inserted = db.sellers().insert(greg.clone()).await.unwrap();

        assert_eq!(inserted.name, greg.name);
        assert!(Arc::ptr_eq(&inserted.department, &greg.department));
        assert!(greg.id.is_none());
    });

    db_test!(test_insert_ignored_by_trigger_reports_no_rows_affected, |db| {
        sqlx::raw_sql(
            "CREATE TRIGGER ignore_seller_insert BEFORE INSERT ON seller BEGIN SELECT RAISE(IGNORE); END",
        )
        .execute(&mut *db.conn())
        .await
        .unwrap();

        let err = db.sellers().insert(SellerFixtures::greg()).await.unwrap_err();

        assert!(matches!(err, DbError::NoRowsAffected));
        assert!(err.is_no_rows_affected());
        assert_eq!(err.to_string(), "Unexpected error! No rows affected!");
        assert_eq!(db.count_rows("seller").await.unwrap(), SellerFixtures::COUNT as i64);
    });

    db_test!(test_insert_unknown_department_is_integrity_error, |db| {
        let seller = TestSellerBuilder::new()
            .in_department(DepartmentFixtures::UNKNOWN)
            .build();

        let err = db.sellers().insert(seller).await.unwrap_err();
        assert!(err.is_integrity_violation(), "unexpected error: {}", err);
        assert!(err.to_string().contains("FOREIGN KEY"));
    });

    db_test!(test_connection_usable_after_failed_insert, |db| {
        let mut sellers = db.sellers();
        let bad = TestSellerBuilder::new()
            .in_department(DepartmentFixtures::UNKNOWN)
            .build();
        assert!(sellers.insert(bad).await.is_err());

        let all = sellers.find_all().await.unwrap();
        assert_eq!(all.len(), SellerFixtures::COUNT);
    });

    db_test!(test_insert_many_fake_sellers, |db| {
        let mut sellers = db.sellers();
        let mut ids = Vec::new();
        for _ in 0..5 {
            let stored = sellers
                .insert(fake_seller(DepartmentFixtures::BOOKS))
                .await
                .unwrap();
            ids.push(stored.id.unwrap());
        }

        let mut distinct = ids.clone();
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), 5);

        let books = sellers
            .find_by_department(&Department::reference(DepartmentFixtures::BOOKS))
            .await
            .unwrap();
        assert_eq!(books.len(), 6);
    });
}

// ============================================================================
// update / delete
// ============================================================================

mod update_delete_tests {
    use super::*;

    db_test!(test_update_overwrites_all_fields, |db| {
        let mut sellers = db.sellers();
        let mut bob = sellers
            .find_by_id(SellerFixtures::BOB_BROWN)
            .await
            .unwrap()
            .unwrap();

        bob.name = "Martha Waine".to_string();
        bob.email = "martha@gmail.com".to_string();
        bob.base_salary = dec!(5200);
        bob.department = Arc::new(Department::reference(DepartmentFixtures::FASHION));

        let affected = sellers.update(&bob).await.unwrap();
        assert_eq!(affected, 1);

        let reloaded = sellers
            .find_by_id(SellerFixtures::BOB_BROWN)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.name, "Martha Waine");
        assert_eq!(reloaded.base_salary, dec!(5200));
        assert_eq!(reloaded.department.id, DepartmentFixtures::FASHION);
        assert_eq!(reloaded.department.name.as_deref(), Some("Fashion"));
    });

    db_test!(test_update_from_built_seller_replaces_stored_row, |db| {
        let replacement = TestSellerBuilder::new()
            .with_id(SellerFixtures::DONALD_BLUE)
            .with_name("Donald Black")
            .with_email("donald.black@gmail.com")
            .with_birth_date(DateFixtures::greg_birth_date())
            .with_base_salary(SalaryFixtures::zero())
            .in_department(DepartmentFixtures::BOOKS)
            .build();

        assert_eq!(db.sellers().update(&replacement).await.unwrap(), 1);

        let reloaded = db
            .sellers()
            .find_by_id(SellerFixtures::DONALD_BLUE)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.email, "donald.black@gmail.com");
        assert_eq!(reloaded.birth_date, DateFixtures::greg_birth_date());
        assert!(reloaded.base_salary.is_zero());
        assert_eq!(reloaded.department.name.as_deref(), Some("Books"));
    });

    db_test!(test_update_unknown_id_is_silent_no_op, |db| {
        let before = db.sellers().find_all().await.unwrap();

        let ghost = TestSellerBuilder::new()
            .with_id(SellerFixtures::UNKNOWN)
            .build();
        let affected = db.sellers().update(&ghost).await.unwrap();
        assert_eq!(affected, 0);

        let after = db.sellers().find_all().await.unwrap();
        assert_eq!(names(&before), names(&after));
    });

    db_test!(test_update_without_id_is_rejected, |db| {
        let unsaved = SellerFixtures::greg();
        let err = db.sellers().update(&unsaved).await.unwrap_err();
        assert!(matches!(err, DbError::MissingId("Seller")));
    });

    db_test!(test_delete_removes_row, |db| {
        let affected = db
            .sellers()
            .delete_by_id(SellerFixtures::DONALD_BLUE)
            .await
            .unwrap();
        assert_eq!(affected, 1);

        assert!(db
            .sellers()
            .find_by_id(SellerFixtures::DONALD_BLUE)
            .await
            .unwrap()
            .is_none());
        assert_eq!(db.count_rows("seller").await.unwrap(), 5);
    });

    db_test!(test_delete_unknown_id_is_silent_no_op, |db| {
        let affected = db
            .sellers()
            .delete_by_id(SellerFixtures::UNKNOWN)
            .await
            .unwrap();
        assert_eq!(affected, 0);
        assert_eq!(db.count_rows("seller").await.unwrap(), 6);
    });
}

// ============================================================================
// finders
// ============================================================================

mod find_tests {
    use super::*;

    db_test!(test_find_by_id_populates_department, |db| {
        let alex = db
            .sellers()
            .find_by_id(SellerFixtures::ALEX_GREY)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(alex.id, Some(SellerFixtures::ALEX_GREY));
        assert_eq!(alex.name, "Alex Grey");
        assert_eq!(alex.email, "alex@gmail.com");
        assert_eq!(alex.base_salary, dec!(2200));
        assert_eq!(alex.department.id, DepartmentFixtures::COMPUTERS);
        assert_eq!(alex.department.name.as_deref(), Some("Computers"));
    });

    db_test!(test_find_by_id_unknown_is_none, |db| {
        let found = db.sellers().find_by_id(SellerFixtures::UNKNOWN).await.unwrap();
        assert!(found.is_none());
    });

    db_test!(test_find_by_department_filters_and_orders, |db| {
        let electronics = db
            .sellers()
            .find_by_department(&DepartmentFixtures::electronics_ref())
            .await
            .unwrap();

        assert_eq!(names(&electronics), vec!["Alex Pink", "Maria Green"]);
        assert_all_in_department(&electronics, DepartmentFixtures::ELECTRONICS);
        assert_departments_deduplicated(&electronics);
        assert_eq!(electronics[0].department.name.as_deref(), Some("Electronics"));
    });

    db_test!(test_find_by_department_ignores_lookup_name, |db| {
        let misnamed = Department::new(DepartmentFixtures::COMPUTERS, "Not Computers");
        let computers = db.sellers().find_by_department(&misnamed).await.unwrap();

        assert_eq!(names(&computers), vec!["Alex Grey", "Bob Brown"]);
        assert_eq!(computers[0].department.name.as_deref(), Some("Computers"));
    });

    db_test!(test_find_by_department_without_sellers_is_empty, |db| {
        let none = db
            .sellers()
            .find_by_department(&Department::reference(DepartmentFixtures::UNKNOWN))
            .await
            .unwrap();
        assert!(none.is_empty());
    });

    db_test!(test_find_all_orders_by_name, |db| {
        let all = db.sellers().find_all().await.unwrap();

        assert_eq!(names(&all), SellerFixtures::names_sorted());
        assert_sorted_by_name(&all);
    });

    db_test!(test_find_all_shares_department_instances, |db| {
        let all = db.sellers().find_all().await.unwrap();

        assert_departments_deduplicated(&all);

        let alex_grey = all.iter().find(|s| s.name == "Alex Grey").unwrap();
        let bob_brown = all.iter().find(|s| s.name == "Bob Brown").unwrap();
        let maria = all.iter().find(|s| s.name == "Maria Green").unwrap();
        assert!(Arc::ptr_eq(&alex_grey.department, &bob_brown.department));
        assert!(!Arc::ptr_eq(&alex_grey.department, &maria.department));
    });

    db_test!(test_department_instances_not_shared_across_calls, |db| {
        let mut sellers = db.sellers();
        let first = sellers.find_by_id(SellerFixtures::BOB_BROWN).await.unwrap().unwrap();
        let second = sellers.find_by_id(SellerFixtures::ALEX_GREY).await.unwrap().unwrap();

        assert_eq!(first.department, second.department);
        assert!(!Arc::ptr_eq(&first.department, &second.department));
    });

    db_test!(test_missing_table_is_query_error, |db| {
        sqlx::query("DROP TABLE seller")
            .execute(db.conn())
            .await
            .unwrap();

        let err = db.sellers().find_all().await.unwrap_err();
        match err {
            DbError::Query(msg) => assert!(msg.contains("no such table")),
            other => panic!("Expected Query error, got {:?}", other),
        }
    });
}

// ============================================================================
// scenarios
// ============================================================================

mod scenario_tests {
    use super::*;

    #[tokio::test]
    async fn test_department_listing_is_alphabetical() {
        let mut db = TestDatabase::empty().await.unwrap();
        let electronics = {
            let mut departments = db.departments();
            departments.insert("Computers").await.unwrap();
            departments.insert("Electronics").await.unwrap()
        };
        assert_eq!(electronics.id, DepartmentId::new(2));

        let mut sellers = db.sellers();
        for name in ["Carol", "Alex", "Bob"] {
            let seller = TestSellerBuilder::new()
                .with_name(name)
                .in_department(electronics.id)
                .build();
            sellers.insert(seller).await.unwrap();
        }

        let listed = sellers
            .find_by_department(&Department::reference(DepartmentId::new(2)))
            .await
            .unwrap();
        assert_eq!(names(&listed), vec!["Alex", "Bob", "Carol"]);
        assert_departments_deduplicated(&listed);
    }

    #[test]
    fn prop_inserted_sellers_list_in_name_order() {
        use proptest::prelude::*;
        use test_utils::{birth_date_strategy, salary_strategy, seller_name_strategy};

        let runtime = tokio::runtime::Runtime::new().unwrap();
        let config = ProptestConfig::with_cases(16);

        proptest!(config, |(entries in prop::collection::vec((seller_name_strategy(), birth_date_strategy(), salary_strategy()), 1..8))| {
            runtime.block_on(async {
                let mut db = TestDatabase::new().await.unwrap();
                let mut sellers = db.sellers();

                for (name, birth_date, salary) in &entries {
                    let seller = TestSellerBuilder::new()
                        .with_name(name.clone())
                        .with_birth_date(*birth_date)
                        .with_base_salary(*salary)
                        .in_department(DepartmentFixtures::FASHION)
                        .build();
                    let stored = sellers.insert(seller).await.unwrap();
                    let found = sellers.find_by_id(stored.id.unwrap()).await.unwrap().unwrap();
                    assert_eq!(found.base_salary, *salary);
                    assert_eq!(found.birth_date, *birth_date);
                }

                let fashion = sellers
                    .find_by_department(&Department::reference(DepartmentFixtures::FASHION))
                    .await
                    .unwrap();
                assert_eq!(fashion.len(), entries.len() + 1);
                assert_sorted_by_name(&fashion);
                assert_departments_deduplicated(&fashion);
            });
        });
    }
}
