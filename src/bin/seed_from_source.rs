// src/bin/seed_from_source.rs

use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use std::env;

use transaction_dashboard_backend::services::{seed_source::SeedSourceService, transactions};

const DEFAULT_SEED_SOURCE_URL: &str =
    "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Usage: cargo run --bin seed_from_source -- [source_url]
    let args: Vec<String> = env::args().collect();
    let source_url = args
        .get(1)
        .cloned()
        .or_else(|| env::var("SEED_SOURCE_URL").ok())
        .unwrap_or_else(|| DEFAULT_SEED_SOURCE_URL.to_string());

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db = Database::connect(&database_url).await?;
    migration::Migrator::up(&db, None).await?;

    println!("Fetching seed data from {}...", source_url);
    let seed = SeedSourceService::new(source_url).fetch_transactions().await?;
    println!("Fetched {} transactions", seed.len());

    let records = transactions::seed_to_active_models(seed)?;
    let inserted = transactions::insert_seed_batch(&db, records).await?;
    println!("Inserted {} rows (duplicates are kept on repeat runs)", inserted);

    Ok(())
}
