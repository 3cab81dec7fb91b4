//! In-Memory Storage Adapter
//!
//! Keeps the three record sets in lock-guarded collections. Useful for tests
//! and development, and demonstrates that repositories and services run
//! unchanged against a second adapter.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::domain::{Cart, Order, Product, ProductId};
use crate::ports::{ShopStorage, StorageError};

/// In-memory storage for products, orders, and the session cart.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    products: RwLock<BTreeMap<ProductId, Product>>,
    orders: RwLock<Vec<Order>>,
    cart: RwLock<Cart>,
}

impl InMemoryStorage {
    /// Create an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all stored data (useful for tests).
    pub fn clear(&self) {
        self.products.write().unwrap().clear();
        self.orders.write().unwrap().clear();
        *self.cart.write().unwrap() = Cart::new();
    }
}

impl ShopStorage for InMemoryStorage {
    fn load_products(&self) -> BTreeMap<ProductId, Product> {
        self.products.read().unwrap().clone()
    }

    fn save_products(&self, products: &BTreeMap<ProductId, Product>) -> Result<(), StorageError> {
        *self.products.write().unwrap() = products.clone();
        Ok(())
    }

    fn load_orders(&self) -> Vec<Order> {
        self.orders.read().unwrap().clone()
    }

    fn save_orders(&self, orders: &[Order]) -> Result<(), StorageError> {
        *self.orders.write().unwrap() = orders.to_vec();
        Ok(())
    }

    fn load_cart(&self) -> Cart {
        self.cart.read().unwrap().clone()
    }

    fn save_cart(&self, cart: &Cart) -> Result<(), StorageError> {
        *self.cart.write().unwrap() = cart.clone();
        Ok(())
    }
}
