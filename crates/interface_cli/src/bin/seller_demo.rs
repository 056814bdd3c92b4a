//! Seller Registry - Demo Binary
//!
//! Opens the configured database, prepares the schema and runs every seller
//! operation once, printing the results.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (./sellers.db)
//! cargo run --bin seller-demo
//!
//! # Run against a throwaway in-memory database
//! SALES_DATABASE_URL=sqlite::memory: cargo run --bin seller-demo
//! ```
//!
//! # Environment Variables
//!
//! * `SALES_DATABASE_URL` - SQLite connection string (default: sqlite://sellers.db)
//! * `SALES_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `SALES_LOAD_SAMPLE_DATA` - Seed an empty database with reference data (default: true)

use infra_db::schema::{create_schema, load_sample_data};
use infra_db::{close, connect, SellerRepository};
use interface_cli::config::AppConfig;
use interface_cli::demo::run_scenarios;
use interface_cli::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_tracing(&config.log_level);

    tracing::info!(database_url = %config.database_url, "Starting seller demo");

    let mut conn = connect(&config.database_config()).await?;
    create_schema(&mut conn).await?;
    if config.load_sample_data {
        load_sample_data(&mut conn).await?;
    }

    let outcome = {
        let mut sellers = SellerRepository::new(&mut conn);
        run_scenarios(&mut sellers).await
    };

    // Close even when a scenario failed
    close(conn).await?;

    print!("{}", outcome?);
    Ok(())
}
