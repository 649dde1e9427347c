//! Monthly sales statistics endpoint.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::AppState;
use crate::models::transaction::{ErrorResponse, MonthQuery, StatisticsResponse};
use crate::services::{aggregates, transactions};

/// GET /api/statistics?month=3
///
/// Sale total over sold records plus sold/not-sold counts for the given
/// calendar month, any year. Non-numeric `month` yields all zeros.
pub async fn get_statistics(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<StatisticsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let rows = transactions::find_by_sale_month(&state.db, query.parsed_month())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Database error fetching statistics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch statistics".to_string(),
                }),
            )
        })?;

    Ok(Json(aggregates::compute_statistics(&rows)))
}
