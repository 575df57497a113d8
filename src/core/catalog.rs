use crate::domain::model::{Product, ProductId, StockLevel};
use crate::domain::ports::{CatalogClient, ConfigProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the catalog/inventory service.
#[derive(Debug, Clone)]
pub struct CatalogApi {
    client: Client,
    base_url: String,
}

impl CatalogApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &impl ConfigProvider) -> Self {
        Self::new(config.api_endpoint())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).send().await?.error_for_status()?;

        tracing::debug!("API response status: {}", response.status());
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl CatalogClient for CatalogApi {
    async fn stock(&self, product_id: ProductId) -> Result<StockLevel> {
        self.get_json(&format!("/stock/{}", product_id)).await
    }

    async fn product(&self, product_id: ProductId) -> Result<Product> {
        self.get_json(&format!("/products/{}", product_id)).await
    }
}
