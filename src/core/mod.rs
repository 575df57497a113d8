pub mod catalog;
pub mod persistence;
pub mod store;

pub use crate::domain::model::{CartNotice, LineItem, Product, ProductId, StockLevel};
pub use crate::domain::ports::{CatalogClient, ConfigProvider, KeyValueStore, Notifier};
pub use crate::utils::error::Result;
