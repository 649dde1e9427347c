use std::collections::BTreeMap;

use axum::Router;
use chrono::DateTime;
use sea_orm::{
    DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, MockExecResult, RuntimeErr,
};

use transaction_dashboard_backend::entities::product_transactions;
use transaction_dashboard_backend::services::seed_source::SeedSourceService;
use transaction_dashboard_backend::{AppState, build_router};

/// Seed source pointing nowhere, for tests that never touch it.
const UNUSED_SEED_URL: &str = "http://127.0.0.1:9/unused";

pub fn transaction_row(
    id: i32,
    price: f64,
    sold: bool,
    category: &str,
    date: &str,
) -> product_transactions::Model {
    product_transactions::Model {
        id,
        source_id: i64::from(id),
        title: format!("Item {}", id),
        price,
        description: String::new(),
        category: category.to_string(),
        image: String::new(),
        sold,
        date_of_sale: DateTime::parse_from_rfc3339(date).unwrap(),
    }
}

/// The scenario fixture: one sold 50.0 record and one unsold 150.0 record,
/// both dated in March.
pub fn march_rows() -> Vec<product_transactions::Model> {
    vec![
        transaction_row(1, 50.0, true, "electronics", "2023-03-05T00:00:00+00:00"),
        transaction_row(2, 150.0, false, "men's clothing", "2023-03-10T00:00:00+00:00"),
    ]
}

pub fn router_for(db: DatabaseConnection, seed_url: String) -> Router {
    build_router(AppState {
        db,
        seed_source: SeedSourceService::new(seed_url),
    })
}

/// Router over a mock store that answers each SELECT with the next queued
/// row set, in order.
pub fn router_with_query_results(results: Vec<Vec<product_transactions::Model>>) -> Router {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(results)
        .into_connection();
    router_for(db, UNUSED_SEED_URL.to_string())
}

/// Router over a mock store whose next query fails, for store-failure paths.
#[allow(dead_code)]
pub fn router_with_query_error() -> Router {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Conn(RuntimeErr::Internal(
            "connection lost".to_owned(),
        ))])
        .into_connection();
    router_for(db, UNUSED_SEED_URL.to_string())
}

/// Router for seed tests: mock store expecting one bulk insert, seed source
/// pointed at the given URL. Postgres inserts go through RETURNING, so the
/// mock queues both a returned pk row and an exec result.
#[allow(dead_code)]
pub fn seed_router(seed_url: String, rows_affected: u64) -> Router {
    let returned_pk: BTreeMap<&str, sea_orm::Value> =
        [("id", sea_orm::Value::Int(Some(rows_affected as i32)))]
            .into_iter()
            .collect();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![returned_pk]])
        .append_exec_results([MockExecResult {
            last_insert_id: rows_affected,
            rows_affected,
        }])
        .into_connection();
    router_for(db, seed_url)
}

/// Like [`seed_router`], but queues result pairs for `batches` bulk inserts
/// and also returns the mock connection so callers can inspect the statement
/// log after the fact.
#[allow(dead_code)]
pub fn seed_router_with_db(seed_url: String, batches: u64) -> (Router, DatabaseConnection) {
    let mut mock = MockDatabase::new(DatabaseBackend::Postgres);
    for batch in 0..batches {
        let returned_pk: BTreeMap<&str, sea_orm::Value> =
            [("id", sea_orm::Value::Int(Some(batch as i32 + 1)))]
                .into_iter()
                .collect();
        mock = mock
            .append_query_results([vec![returned_pk]])
            .append_exec_results([MockExecResult {
                last_insert_id: batch + 1,
                rows_affected: 2,
            }]);
    }
    let db = mock.into_connection();
    (router_for(db.clone(), seed_url), db)
}
