//! Combined dashboard endpoint.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::AppState;
use crate::models::transaction::{CombinedResponse, ErrorResponse, MonthQuery};
use crate::services::{aggregates, transactions};

/// GET /api/combined-data?month=3
///
/// In-process composition of the statistics, bar-chart and pie-chart views
/// over a single month-filtered fetch; no self-HTTP round-trips. A store
/// failure fails the whole response, never partial results.
pub async fn get_combined_data(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<CombinedResponse>, (StatusCode, Json<ErrorResponse>)> {
    let rows = transactions::find_by_sale_month(&state.db, query.parsed_month())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Database error fetching combined data");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch combined data".to_string(),
                }),
            )
        })?;

    Ok(Json(CombinedResponse {
        statistics: aggregates::compute_statistics(&rows),
        bar_chart_data: aggregates::price_histogram(&rows),
        pie_chart_data: aggregates::category_breakdown(&rows),
    }))
}
