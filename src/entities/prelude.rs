pub use super::product_transactions::Entity as ProductTransactions;
