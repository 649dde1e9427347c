//! In-process aggregation over month-filtered transaction rows.
//!
//! Each endpoint fetches the month's rows once and derives its view here;
//! the combined endpoint reuses the same fetch for all three views.

use std::collections::HashMap;

use crate::entities::product_transactions::Model;
use crate::models::transaction::{BarChartEntry, PieChartEntry, StatisticsResponse};

/// Fixed histogram buckets, inclusive on both ends; the last bucket is
/// unbounded above. Prices between consecutive integer bounds (e.g. 100.5)
/// fall in no bucket, matching the reference dataset of integer-ish prices.
pub const PRICE_BUCKETS: [(u32, Option<u32>); 10] = [
    (0, Some(100)),
    (101, Some(200)),
    (201, Some(300)),
    (301, Some(400)),
    (401, Some(500)),
    (501, Some(600)),
    (601, Some(700)),
    (701, Some(800)),
    (801, Some(900)),
    (901, None),
];

/// Label for one bucket; the unbounded bucket renders as "901-Infinity"
/// for bit-compatibility with the dashboard frontend.
pub fn bucket_label(min: u32, max: Option<u32>) -> String {
    match max {
        Some(max) => format!("{}-{}", min, max),
        None => format!("{}-Infinity", min),
    }
}

fn bucket_contains(min: u32, max: Option<u32>, price: f64) -> bool {
    price >= f64::from(min) && max.is_none_or(|max| price <= f64::from(max))
}

/// Sale total over sold rows plus sold/not-sold counts.
pub fn compute_statistics(rows: &[Model]) -> StatisticsResponse {
    let mut total_sale_amount = 0.0;
    let mut total_sold_items = 0;
    let mut total_not_sold_items = 0;

    for row in rows {
        if row.sold {
            total_sale_amount += row.price;
            total_sold_items += 1;
        } else {
            total_not_sold_items += 1;
        }
    }

    StatisticsResponse {
        total_sale_amount,
        total_sold_items,
        total_not_sold_items,
    }
}

/// Count per price bucket, always 10 entries in fixed bucket order.
/// No filter on `sold`.
pub fn price_histogram(rows: &[Model]) -> Vec<BarChartEntry> {
    PRICE_BUCKETS
        .iter()
        .map(|&(min, max)| BarChartEntry {
            price_range: bucket_label(min, max),
            count: rows
                .iter()
                .filter(|row| bucket_contains(min, max, row.price))
                .count() as u64,
        })
        .collect()
}

/// Count per distinct category; zero categories are omitted, order
/// unspecified.
pub fn category_breakdown(rows: &[Model]) -> Vec<PieChartEntry> {
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for row in rows {
        *counts.entry(row.category.as_str()).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|(category, count)| PieChartEntry {
            category: category.to_string(),
            count,
        })
        .collect()
}
