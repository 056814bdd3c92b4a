//! Demo scenarios
//!
//! Walks through every seller operation once against whatever store it is
//! given and collects the results for printing.

use std::fmt;
use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use rust_decimal_macros::dec;
use tracing::info;

use core_kernel::{DepartmentId, SellerId};
use domain_sales::{Department, Seller};
use infra_db::SellerStore;

/// Seller looked up by id in the first scenario
pub const LOOKUP_SELLER: SellerId = SellerId::new(3);

/// Department listed in the second scenario
pub const LOOKUP_DEPARTMENT: DepartmentId = DepartmentId::new(2);

/// Seller renamed in the update scenario
pub const RENAMED_SELLER: SellerId = SellerId::new(1);

/// Results of one demo run
#[derive(Debug)]
pub struct DemoOutcome {
    pub found: Option<Seller>,
    pub by_department: Vec<Seller>,
    pub all: Vec<Seller>,
    pub inserted: Seller,
    pub updated_rows: u64,
    pub deleted_rows: u64,
}

/// Console report of the demo run
impl fmt::Display for DemoOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== TEST 1: seller find_by_id ===")?;
        match &self.found {
            Some(seller) => writeln!(f, "{}", seller)?,
            None => writeln!(f, "No seller with id {}", LOOKUP_SELLER)?,
        }

        writeln!(f, "\n=== TEST 2: seller find_by_department ===")?;
        for seller in &self.by_department {
            writeln!(f, "{}", seller)?;
        }

        writeln!(f, "\n=== TEST 3: seller find_all ===")?;
        for seller in &self.all {
            writeln!(f, "{}", seller)?;
        }

        writeln!(f, "\n=== TEST 4: seller insert ===")?;
        match self.inserted.id {
            Some(id) => writeln!(f, "Inserted! New id = {}", id)?,
            None => writeln!(f, "Inserted! New id = none")?,
        }

        writeln!(f, "\n=== TEST 5: seller update ===")?;
        writeln!(f, "Update completed, {} row(s) affected", self.updated_rows)?;

        writeln!(f, "\n=== TEST 6: seller delete ===")?;
        writeln!(f, "Delete completed, {} row(s) affected", self.deleted_rows)
    }
}

/// Runs find, insert, update and delete once each
///
/// The inserted seller is deleted again at the end, so a run leaves the
/// seller count unchanged.
pub async fn run_scenarios<S>(store: &mut S) -> anyhow::Result<DemoOutcome>
where
    S: SellerStore + ?Sized,
{
    let found = store.find_by_id(LOOKUP_SELLER).await?;

    let department = Department::reference(LOOKUP_DEPARTMENT);
    let by_department = store.find_by_department(&department).await?;

    let all = store.find_all().await?;

    let greg = Seller::new(
        "Greg",
        "greg@gmail.com",
        Utc::now().date_naive(),
        dec!(4000.0),
        Arc::new(department),
    )?;
    let inserted = store.insert(greg).await?;
    let inserted_id = inserted.id.context("insert returned a seller without id")?;
    info!(seller_id = %inserted_id.tagged(), "Demo seller inserted");

    let updated_rows = match store.find_by_id(RENAMED_SELLER).await? {
        Some(mut seller) => {
            seller.name = "Martha Waine".to_string();
            store.update(&seller).await?
        }
        None => 0,
    };

    let deleted_rows = store.delete_by_id(inserted_id).await?;

    Ok(DemoOutcome {
        found,
        by_department,
        all,
        inserted,
        updated_rows,
        deleted_rows,
    })
}
