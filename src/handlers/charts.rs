//! Chart data endpoints: price-bucket histogram and category breakdown.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::AppState;
use crate::models::transaction::{BarChartEntry, ErrorResponse, MonthQuery, PieChartEntry};
use crate::services::{aggregates, transactions};

/// GET /api/bar-chart?month=3
///
/// Count per fixed price bucket for the month, always 10 entries in bucket
/// order. No filter on `sold`.
pub async fn get_bar_chart(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<BarChartEntry>>, (StatusCode, Json<ErrorResponse>)> {
    let rows = transactions::find_by_sale_month(&state.db, query.parsed_month())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Database error fetching bar chart data");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch bar chart data".to_string(),
                }),
            )
        })?;

    Ok(Json(aggregates::price_histogram(&rows)))
}

/// GET /api/pie-chart?month=3
///
/// Count per distinct category for the month; zero categories omitted.
pub async fn get_pie_chart(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<PieChartEntry>>, (StatusCode, Json<ErrorResponse>)> {
    let rows = transactions::find_by_sale_month(&state.db, query.parsed_month())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Database error fetching pie chart data");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch pie chart data".to_string(),
                }),
            )
        })?;

    Ok(Json(aggregates::category_breakdown(&rows)))
}
