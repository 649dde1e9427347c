// src/lib.rs

use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use services::seed_source::SeedSourceService;

/// Shared per-request state: the store connection and the seed source
/// client, both constructed once at startup and cloned into handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub seed_source: SeedSourceService,
}

pub mod entities {
    pub mod prelude;
    pub mod product_transactions;
}

pub mod services {
    pub mod aggregates;
    pub mod seed_source;
    pub mod transactions;
}

pub mod handlers;
pub mod models;

/// Build the API router. Handlers are stateless; everything they need
/// travels in `AppState`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello_dashboard))
        .route(
            "/api/initialize-database",
            get(handlers::seed::initialize_database),
        )
        .route("/api/statistics", get(handlers::statistics::get_statistics))
        .route("/api/bar-chart", get(handlers::charts::get_bar_chart))
        .route("/api/pie-chart", get(handlers::charts::get_pie_chart))
        .route(
            "/api/combined-data",
            get(handlers::combined::get_combined_data),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn hello_dashboard() -> &'static str {
    "Transaction Dashboard Backend"
}
