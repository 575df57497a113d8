pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "rocket-cart")]
#[command(about = "Shopping cart state manager backed by a remote catalog")]
pub struct CliConfig {
    #[arg(long, default_value = "http://localhost:3333")]
    pub api_endpoint: String,

    #[arg(long, default_value = "./cart-data")]
    pub storage_path: String,

    #[arg(long, help = "Load configuration from a TOML file instead")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn storage_path(&self) -> &str {
        &self.storage_path
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_path("storage_path", &self.storage_path)
    }
}
