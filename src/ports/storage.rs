//! Storage Port - interface for persisting the three store record sets.
//!
//! Products, orders, and the session cart are persisted independently; there
//! is no transaction spanning them. Loads never fail: missing or corrupt data
//! degrades to an empty default (logged by the adapter), so a broken file
//! costs data but never crashes the process. Saves surface I/O faults to the
//! caller.

use std::collections::BTreeMap;

use crate::domain::{Cart, Order, Product, ProductId};

/// Errors that can occur while saving a record set.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to serialize {record}: {reason}")]
    SerializationFailed { record: &'static str, reason: String },

    #[error("IO error on {path}: {reason}")]
    Io { path: String, reason: String },
}

/// Port for loading and saving the store's three record sets.
pub trait ShopStorage: Send + Sync {
    /// Load the product catalog, keyed by product id.
    ///
    /// Returns an empty map when no backing data exists or it is unreadable.
    fn load_products(&self) -> BTreeMap<ProductId, Product>;

    /// Persist the entire product catalog.
    ///
    /// # Errors
    /// Returns `StorageError` if serialization or the write fails.
    fn save_products(&self, products: &BTreeMap<ProductId, Product>) -> Result<(), StorageError>;

    /// Load the order log in placement order.
    ///
    /// Returns an empty list when no backing data exists or it is unreadable.
    fn load_orders(&self) -> Vec<Order>;

    /// Persist the entire order log.
    ///
    /// # Errors
    /// Returns `StorageError` if serialization or the write fails.
    fn save_orders(&self, orders: &[Order]) -> Result<(), StorageError>;

    /// Load the session cart.
    ///
    /// Returns an empty cart when no backing data exists or it is unreadable.
    fn load_cart(&self) -> Cart;

    /// Persist the session cart.
    ///
    /// # Errors
    /// Returns `StorageError` if serialization or the write fails.
    fn save_cart(&self, cart: &Cart) -> Result<(), StorageError>;
}
