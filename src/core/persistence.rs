use crate::domain::model::LineItem;
use crate::domain::ports::KeyValueStore;
use crate::utils::error::Result;

/// Storage key shared with the original web front end.
pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

/// Saves and loads the whole cart as one JSON blob under a fixed key.
pub struct CartPersistence<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> CartPersistence<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Loads the last saved cart. Absent, unreadable, or corrupt data all
    /// yield an empty cart; load never fails.
    pub async fn load(&self) -> Vec<LineItem> {
        let raw = match self.storage.get(CART_STORAGE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Could not read stored cart, starting empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(cart) => cart,
            Err(e) => {
                tracing::warn!("Stored cart is corrupt, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Overwrites the stored cart with the full state. Storage faults
    /// propagate to the caller.
    pub async fn save(&self, cart: &[LineItem]) -> Result<()> {
        let raw = serde_json::to_string(cart)?;
        tracing::debug!("Writing cart ({} items) to storage", cart.len());
        self.storage.set(CART_STORAGE_KEY, &raw).await
    }
}
