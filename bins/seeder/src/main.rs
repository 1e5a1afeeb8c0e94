//! Demo data seeder for Payflow development and testing.
//!
//! Overwrites the configured store file with the demo seed: one verified
//! beneficiary and the default configuration entries.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::Utc;
use payflow_core::StoreBackend;
use payflow_db::{JsonFileBackend, demo_state};
use payflow_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let backend = JsonFileBackend::new(&config.store.path);

    println!("Seeding {}...", backend.path().display());
    let state = demo_state(Utc::now());
    backend
        .persist(&state)
        .context("Failed to write demo seed")?;

    println!(
        "Seeded {} beneficiaries and {} configuration entries",
        state.beneficiaries.len(),
        state.configurations.len()
    );
    println!("Seeding complete!");
    Ok(())
}
