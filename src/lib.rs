pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::cli::{JsonFileStorage, TracingNotifier};
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::catalog::CatalogApi;
pub use crate::core::persistence::{CartPersistence, CART_STORAGE_KEY};
pub use crate::core::store::CartStore;
pub use crate::domain::model::{CartNotice, LineItem, Product, ProductId, StockLevel};
pub use crate::utils::error::{CartError, Result};
