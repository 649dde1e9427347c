//! Seed endpoint: one-shot bulk load from the external dataset.

use axum::{Json, extract::State, http::StatusCode};

use crate::AppState;
use crate::models::transaction::{ErrorResponse, InitializeResponse};
use crate::services::transactions;

/// GET /api/initialize-database
///
/// Fetches the upstream JSON array and bulk-inserts it in one statement.
/// All-or-nothing: a fetch error, a malformed date, or an insert failure
/// fails the whole batch. Calling this again appends duplicate rows.
pub async fn initialize_database(
    State(state): State<AppState>,
) -> Result<Json<InitializeResponse>, (StatusCode, Json<ErrorResponse>)> {
    let seed = state.seed_source.fetch_transactions().await.map_err(|e| {
        tracing::error!(error = %e, "Failed to fetch seed data");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to initialize database".to_string(),
            }),
        )
    })?;

    let records = transactions::seed_to_active_models(seed).map_err(|e| {
        tracing::error!(error = %e, "Seed payload contains a malformed dateOfSale");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to initialize database".to_string(),
            }),
        )
    })?;

    let inserted = transactions::insert_seed_batch(&state.db, records)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Database error inserting seed batch");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to initialize database".to_string(),
                }),
            )
        })?;

    tracing::info!("Seeded {} product transactions", inserted);

    Ok(Json(InitializeResponse {
        message: "Database initialized successfully".to_string(),
    }))
}
