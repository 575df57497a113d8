use crate::domain::model::CartNotice;
use crate::domain::ports::{ConfigProvider, KeyValueStore, Notifier};
use crate::utils::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed key-value store: one file per key beneath a base directory.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    base_path: String,
}

impl JsonFileStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn from_config(config: &impl ConfigProvider) -> Self {
        Self::new(config.storage_path().to_string())
    }

    fn key_path(&self, key: &str) -> PathBuf {
        // Keys carry characters that are awkward in file names.
        let file_name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        Path::new(&self.base_path).join(format!("{}.json", file_name))
    }
}

impl KeyValueStore for JsonFileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, value)?;
        Ok(())
    }
}

/// Notifier that surfaces notices through the log. Toast rendering belongs
/// to the presentation layer; this crate's own surface is structured logging.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: CartNotice) {
        tracing::warn!("{}", notice);
    }
}
