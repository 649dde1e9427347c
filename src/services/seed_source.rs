//! Client for the external seed dataset.
//!
//! The seed source is a static JSON array of product transactions. It is
//! fetched in full on every call to the initialize endpoint; there is no
//! retry and no incremental sync.

use reqwest::Client;
use serde::Deserialize;

#[derive(Clone)]
pub struct SeedSourceService {
    client: Client,
    source_url: String,
}

/// One element of the upstream JSON array. `dateOfSale` is kept as the raw
/// string here; parsing happens when rows are mapped into the entity so a
/// malformed date fails the whole batch.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedTransaction {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
    pub sold: bool,
    #[serde(rename = "dateOfSale")]
    pub date_of_sale: String,
}

impl SeedSourceService {
    pub fn new(source_url: String) -> Self {
        Self {
            client: Client::new(),
            source_url,
        }
    }

    pub async fn fetch_transactions(
        &self,
    ) -> Result<Vec<SeedTransaction>, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Fetching seed transactions from {}", self.source_url);

        let response = self
            .client
            .get(&self.source_url)
            .header("accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            return Err(format!("Seed source error {}: {}", status, error_text).into());
        }

        let transactions: Vec<SeedTransaction> = response.json().await?;

        tracing::info!(
            "Fetched {} transactions from seed source",
            transactions.len()
        );

        Ok(transactions)
    }
}
