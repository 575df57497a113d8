use crate::domain::model::{CartNotice, Product, ProductId, StockLevel};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Remote catalog/inventory service consumed by the cart.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn stock(&self, product_id: ProductId) -> Result<StockLevel>;
    async fn product(&self, product_id: ProductId) -> Result<Product>;
}

/// Key-value storage holding the serialized cart.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Sink for user-facing failure notices.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: CartNotice);
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn storage_path(&self) -> &str;
    fn verbose(&self) -> bool;
}
