use anyhow::Result;
use httpmock::prelude::*;
use rocket_cart::domain::ports::Notifier;
use rocket_cart::{CartNotice, CartStore, CatalogApi, JsonFileStorage, TracingNotifier};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

#[derive(Clone, Default)]
struct RecordingNotifier {
    notices: Arc<Mutex<Vec<CartNotice>>>,
}

impl RecordingNotifier {
    fn notices(&self) -> Vec<CartNotice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: CartNotice) {
        self.notices.lock().unwrap().push(notice);
    }
}

fn mock_catalog_entry(server: &MockServer, id: u64, amount: u32, title: &str, price: f64) {
    server.mock(|when, then| {
        when.method(GET).path(format!("/stock/{}", id));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": id, "amount": amount}));
    });
    server.mock(|when, then| {
        when.method(GET).path(format!("/products/{}", id));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "id": id,
                "title": title,
                "price": price,
                "image": format!("https://example.com/shoes-{}.jpg", id),
            }));
    });
}

#[tokio::test]
async fn test_cart_scenario_end_to_end() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    mock_catalog_entry(&server, 1, 5, "Tênis de Caminhada Leve Confortável", 179.9);

    let notifier = RecordingNotifier::default();
    let mut store = CartStore::new(
        CatalogApi::new(server.base_url()),
        JsonFileStorage::new(temp_dir.path().to_str().unwrap().to_string()),
        notifier.clone(),
    )
    .await;
    assert!(store.is_empty());

    store.add_product(1).await?;
    assert_eq!(store.cart()[0].amount, 1);

    store.add_product(1).await?;
    assert_eq!(store.cart()[0].amount, 2);

    store.update_product_amount(1, 5).await?;
    assert_eq!(store.cart()[0].amount, 5);

    // One more unit would go past the stock of 5.
    store.add_product(1).await?;
    assert_eq!(store.cart()[0].amount, 5);
    assert_eq!(notifier.notices(), vec![CartNotice::StockExceeded]);

    store.remove_product(1).await?;
    assert!(store.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_cart_survives_store_restart() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage_path = temp_dir.path().to_str().unwrap().to_string();
    let server = MockServer::start();
    mock_catalog_entry(&server, 1, 5, "Tênis de Caminhada Leve Confortável", 179.9);
    mock_catalog_entry(&server, 2, 5, "Tênis Adaptável", 139.9);

    let mut store = CartStore::new(
        CatalogApi::new(server.base_url()),
        JsonFileStorage::new(storage_path.clone()),
        TracingNotifier,
    )
    .await;
    store.add_product(1).await?;
    store.add_product(2).await?;
    store.add_product(1).await?;
    let saved = store.cart().to_vec();
    drop(store);

    let reloaded = CartStore::new(
        CatalogApi::new(server.base_url()),
        JsonFileStorage::new(storage_path),
        TracingNotifier,
    )
    .await;

    assert_eq!(reloaded.cart(), saved.as_slice());
    assert_eq!(reloaded.total(), 179.9 * 2.0 + 139.9);

    Ok(())
}

#[tokio::test]
async fn test_subscriber_observes_mutations_in_order() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    mock_catalog_entry(&server, 1, 5, "Tênis de Caminhada Leve Confortável", 179.9);

    let mut store = CartStore::new(
        CatalogApi::new(server.base_url()),
        JsonFileStorage::new(temp_dir.path().to_str().unwrap().to_string()),
        TracingNotifier,
    )
    .await;
    let mut subscriber = store.subscribe();

    store.add_product(1).await?;
    assert_eq!(subscriber.borrow_and_update().len(), 1);

    store.update_product_amount(1, 3).await?;
    assert_eq!(subscriber.borrow_and_update()[0].amount, 3);

    store.remove_product(1).await?;
    assert!(subscriber.borrow_and_update().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_lookup_failure_leaves_persisted_cart_intact() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let storage_path = temp_dir.path().to_str().unwrap().to_string();
    let server = MockServer::start();
    mock_catalog_entry(&server, 1, 5, "Tênis de Caminhada Leve Confortável", 179.9);
    server.mock(|when, then| {
        when.method(GET).path("/stock/2");
        then.status(500);
    });

    let notifier = RecordingNotifier::default();
    let mut store = CartStore::new(
        CatalogApi::new(server.base_url()),
        JsonFileStorage::new(storage_path.clone()),
        notifier.clone(),
    )
    .await;

    store.add_product(1).await?;
    store.add_product(2).await?;

    assert_eq!(store.len(), 1);
    assert_eq!(notifier.notices(), vec![CartNotice::AddFailed]);

    // The stored snapshot still holds only the successful mutation.
    let reloaded = CartStore::new(
        CatalogApi::new(server.base_url()),
        JsonFileStorage::new(storage_path),
        TracingNotifier,
    )
    .await;
    assert_eq!(reloaded.cart(), store.cart());

    Ok(())
}
