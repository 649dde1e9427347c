//! `SeaORM` Entity for the product_transactions table
//!
//! Rows are created in bulk by the seed endpoint and never updated or
//! deleted. `source_id` carries the upstream dataset's `id` field and is
//! deliberately not unique.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Identifier from the seed payload, duplicates allowed
    pub source_id: i64,
    pub title: String,
    /// Sale price, non-negative, used for histogram bucketing
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub description: String,
    /// Free-form label, used for the category breakdown
    pub category: String,
    pub image: String,
    pub sold: bool,
    /// Only the calendar month of this timestamp is ever queried
    pub date_of_sale: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
