//! Store access for product transactions.
//!
//! All aggregate endpoints share one query shape: every row whose
//! `date_of_sale` falls in a given calendar month, any year. Aggregation
//! itself happens in-process (see [`super::aggregates`]).

use chrono::DateTime;
use sea_orm::sea_query::Expr;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};

use crate::entities::{prelude::*, product_transactions};
use crate::services::seed_source::SeedTransaction;

/// Fetch all transactions whose sale date falls in `month` (1-12, any year).
///
/// `None` is the "no match" sentinel produced by the month parse step; it
/// short-circuits to an empty result set without hitting the store,
/// preserving the silently-empty behavior for non-numeric input.
pub async fn find_by_sale_month(
    db: &DatabaseConnection,
    month: Option<i32>,
) -> Result<Vec<product_transactions::Model>, DbErr> {
    let Some(month) = month else {
        return Ok(Vec::new());
    };

    ProductTransactions::find()
        .filter(Expr::cust_with_values(
            "EXTRACT(MONTH FROM date_of_sale) = ?",
            [month],
        ))
        .all(db)
        .await
}

/// Map seed payload entries into insertable rows, parsing `dateOfSale`.
/// Any malformed date fails the whole batch (all-or-nothing seeding).
pub fn seed_to_active_models(
    seed: Vec<SeedTransaction>,
) -> Result<Vec<product_transactions::ActiveModel>, chrono::ParseError> {
    seed.into_iter()
        .map(|t| {
            let date_of_sale = DateTime::parse_from_rfc3339(&t.date_of_sale)?;
            Ok(product_transactions::ActiveModel {
                source_id: Set(t.id),
                title: Set(t.title),
                price: Set(t.price),
                description: Set(t.description),
                category: Set(t.category),
                image: Set(t.image),
                sold: Set(t.sold),
                date_of_sale: Set(date_of_sale),
                ..Default::default()
            })
        })
        .collect()
}

/// Bulk-insert seed rows in a single statement. Returns the number of rows
/// handed to the store. No dedup: repeat seeding appends duplicates.
pub async fn insert_seed_batch(
    db: &DatabaseConnection,
    records: Vec<product_transactions::ActiveModel>,
) -> Result<u64, DbErr> {
    if records.is_empty() {
        return Ok(0);
    }

    let count = records.len() as u64;
    ProductTransactions::insert_many(records).exec(db).await?;
    Ok(count)
}
