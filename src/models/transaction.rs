//! Request and response types for the transaction dashboard API.
//!
//! Wire field names are camelCase to stay compatible with the dashboard
//! frontend consuming these endpoints.

use serde::{Deserialize, Serialize};

/// Generic error body, 500 responses only
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response for GET /api/initialize-database
#[derive(Debug, Serialize)]
pub struct InitializeResponse {
    pub message: String,
}

/// Query parameters shared by all aggregate endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct MonthQuery {
    /// Calendar month 1-12 as a string; non-numeric input matches nothing
    pub month: Option<String>,
}

impl MonthQuery {
    /// Explicit parse step: `Some(n)` for numeric input, `None` as the
    /// "no match" sentinel for missing or non-numeric input. Numeric values
    /// outside 1-12 pass through and simply match no records.
    pub fn parsed_month(&self) -> Option<i32> {
        self.month.as_ref()?.trim().parse::<i32>().ok()
    }
}

/// Response for GET /api/statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    pub total_sale_amount: f64,
    pub total_sold_items: u64,
    pub total_not_sold_items: u64,
}

/// One price bucket in the GET /api/bar-chart response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChartEntry {
    pub price_range: String,
    pub count: u64,
}

/// One category in the GET /api/pie-chart response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChartEntry {
    pub category: String,
    pub count: u64,
}

/// Response for GET /api/combined-data
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedResponse {
    pub statistics: StatisticsResponse,
    pub bar_chart_data: Vec<BarChartEntry>,
    pub pie_chart_data: Vec<PieChartEntry>,
}
