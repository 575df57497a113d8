use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ProductId = u64;

/// Catalog record as served by `GET /products/{id}`. Never mutated by the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
}

/// Stock answer from `GET /stock/{id}`: the maximum purchasable units at
/// query time. Re-fetched on every mutating operation, never cached.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockLevel {
    pub id: ProductId,
    pub amount: u32,
}

/// A product plus the quantity of it currently in the cart.
///
/// At most one line item exists per product id; `amount` stays within the
/// stock level seen by the last successful mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub amount: u32,
}

impl LineItem {
    pub fn new(product: Product, amount: u32) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
            amount,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.amount)
    }
}

/// User-facing failure notices. Stock-exceeded is shared by add and update,
/// so five failure conditions render as four distinct messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartNotice {
    #[error("requested quantity exceeds stock available")]
    StockExceeded,

    #[error("failed to add product")]
    AddFailed,

    #[error("failed to remove product")]
    RemoveFailed,

    #[error("failed to update product quantity")]
    UpdateFailed,
}
