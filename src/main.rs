use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use transaction_dashboard_backend::{
    AppState, build_router, services::seed_source::SeedSourceService,
};

const DEFAULT_SEED_SOURCE_URL: &str =
    "https://s3.amazonaws.com/roxiler.com/product_transaction.json";

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,transaction_dashboard_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Connect to database
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    // Run migrations
    tracing::info!("Running migrations...");
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let seed_source_url =
        env::var("SEED_SOURCE_URL").unwrap_or_else(|_| DEFAULT_SEED_SOURCE_URL.to_string());

    let state = AppState {
        db,
        seed_source: SeedSourceService::new(seed_source_url),
    };

    let app = build_router(state);

    // Start server
    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("Failed to bind listener");

    tracing::info!(
        "Server listening on {}",
        listener.local_addr().expect("listener has a local address")
    );

    axum::serve(listener, app).await.expect("Server error");
}
