use crate::core::persistence::CartPersistence;
use crate::domain::model::{CartNotice, LineItem, ProductId};
use crate::domain::ports::{CatalogClient, KeyValueStore, Notifier};
use crate::utils::error::{CartError, Result};
use tokio::sync::watch;

/// Why a mutation did not apply. Converted into a single notice at the
/// operation boundary; never returned to the caller.
#[derive(Debug)]
enum MutationFailure {
    StockExceeded,
    NotFound,
    Transport(CartError),
}

impl From<CartError> for MutationFailure {
    fn from(err: CartError) -> Self {
        MutationFailure::Transport(err)
    }
}

/// The authoritative in-memory cart.
///
/// Every successful mutation is written through persistence before the new
/// snapshot is published to subscribers. Stock-exceeded, not-found, and
/// lookup failures are reported through the notifier and leave the cart
/// unchanged; the only `Err` a caller sees is a storage-write fault.
///
/// Operations take `&mut self`, so one owned store cannot interleave two
/// mutations. Callers that share a store behind their own lock and hold
/// snapshots across awaits get last-write-wins on the whole state.
pub struct CartStore<C: CatalogClient, S: KeyValueStore, N: Notifier> {
    cart: Vec<LineItem>,
    catalog: C,
    persistence: CartPersistence<S>,
    notifier: N,
    publisher: watch::Sender<Vec<LineItem>>,
}

impl<C: CatalogClient, S: KeyValueStore, N: Notifier> CartStore<C, S, N> {
    /// Builds the store, loading the persisted cart. A missing or corrupt
    /// blob yields an empty cart. Loaded amounts are not re-checked against
    /// current stock; a stale line item is corrected the next time a
    /// mutation touches it.
    pub async fn new(catalog: C, storage: S, notifier: N) -> Self {
        let persistence = CartPersistence::new(storage);
        let cart = persistence.load().await;
        let (publisher, _) = watch::channel(cart.clone());

        Self {
            cart,
            catalog,
            persistence,
            notifier,
            publisher,
        }
    }

    /// Current snapshot, in the order products were first added.
    pub fn cart(&self) -> &[LineItem] {
        &self.cart
    }

    /// Observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Vec<LineItem>> {
        self.publisher.subscribe()
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.cart.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Sum of line-item subtotals.
    pub fn total(&self) -> f64 {
        self.cart.iter().map(LineItem::subtotal).sum()
    }

    /// Puts one more unit of the product in the cart, appending a new line
    /// item on first add.
    pub async fn add_product(&mut self, product_id: ProductId) -> Result<()> {
        match self.try_add(product_id).await {
            Ok(next) => self.commit(next).await,
            Err(failure) => {
                self.report(failure, CartNotice::AddFailed);
                Ok(())
            }
        }
    }

    /// Drops the product's line item, preserving the order of the rest.
    pub async fn remove_product(&mut self, product_id: ProductId) -> Result<()> {
        match self.try_remove(product_id) {
            Ok(next) => self.commit(next).await,
            Err(failure) => {
                self.report(failure, CartNotice::RemoveFailed);
                Ok(())
            }
        }
    }

    /// Sets the product's quantity to `amount` exactly. Zero or negative
    /// requests are a silent no-op so stepper controls cannot drive a
    /// quantity below one.
    pub async fn update_product_amount(
        &mut self,
        product_id: ProductId,
        amount: i64,
    ) -> Result<()> {
        if amount <= 0 {
            return Ok(());
        }

        match self.try_update(product_id, amount).await {
            Ok(next) => self.commit(next).await,
            Err(failure) => {
                self.report(failure, CartNotice::UpdateFailed);
                Ok(())
            }
        }
    }

    async fn try_add(
        &self,
        product_id: ProductId,
    ) -> std::result::Result<Vec<LineItem>, MutationFailure> {
        let stock = self.catalog.stock(product_id).await?;

        let current = self
            .cart
            .iter()
            .find(|item| item.id == product_id)
            .map(|item| item.amount)
            .unwrap_or(0);
        let new_amount = current + 1;

        if new_amount > stock.amount {
            return Err(MutationFailure::StockExceeded);
        }

        let mut next = self.cart.clone();
        if let Some(item) = next.iter_mut().find(|item| item.id == product_id) {
            item.amount = new_amount;
        } else {
            let product = self.catalog.product(product_id).await?;
            next.push(LineItem::new(product, 1));
        }

        Ok(next)
    }

    fn try_remove(
        &self,
        product_id: ProductId,
    ) -> std::result::Result<Vec<LineItem>, MutationFailure> {
        if !self.cart.iter().any(|item| item.id == product_id) {
            return Err(MutationFailure::NotFound);
        }

        Ok(self
            .cart
            .iter()
            .filter(|item| item.id != product_id)
            .cloned()
            .collect())
    }

    async fn try_update(
        &self,
        product_id: ProductId,
        amount: i64,
    ) -> std::result::Result<Vec<LineItem>, MutationFailure> {
        let stock = self.catalog.stock(product_id).await?;

        if amount > i64::from(stock.amount) {
            return Err(MutationFailure::StockExceeded);
        }
        // 0 < amount <= stock.amount, so the narrowing is exact.
        let amount = amount as u32;

        let mut next = self.cart.clone();
        let item = next
            .iter_mut()
            .find(|item| item.id == product_id)
            .ok_or(MutationFailure::NotFound)?;
        item.amount = amount;

        Ok(next)
    }

    /// Persists the new state, swaps it in, and publishes it. Subscribers
    /// only ever observe persisted snapshots.
    async fn commit(&mut self, next: Vec<LineItem>) -> Result<()> {
        self.persistence.save(&next).await?;
        self.cart = next;
        self.publisher.send_replace(self.cart.clone());
        Ok(())
    }

    /// Single conversion point from internal failures to notices.
    fn report(&self, failure: MutationFailure, fallback: CartNotice) {
        let notice = match failure {
            MutationFailure::StockExceeded => CartNotice::StockExceeded,
            MutationFailure::NotFound => fallback,
            MutationFailure::Transport(err) => {
                tracing::warn!("Catalog lookup failed: {}", err);
                fallback
            }
        };
        self.notifier.notify(notice);
    }
}
