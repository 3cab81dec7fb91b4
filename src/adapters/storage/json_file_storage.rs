//! JSON File Storage Adapter
//!
//! Stores each record set as a pretty-printed UTF-8 JSON document in its own
//! file under a configurable data directory. The directory is created on
//! demand before the first write. Integer map keys become JSON string keys
//! and are converted back on load.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::domain::{Cart, Order, Product, ProductId};
use crate::ports::{ShopStorage, StorageError};

const PRODUCTS_FILE: &str = "products.json";
const ORDERS_FILE: &str = "orders.json";
const CART_FILE: &str = "cart.json";

/// File-backed storage for products, orders, and the session cart.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    data_dir: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage rooted at `data_dir`.
    ///
    /// # Example
    /// ```ignore
    /// let storage = JsonFileStorage::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn products_path(&self) -> PathBuf {
        self.data_dir.join(PRODUCTS_FILE)
    }

    fn orders_path(&self) -> PathBuf {
        self.data_dir.join(ORDERS_FILE)
    }

    fn cart_path(&self) -> PathBuf {
        self.data_dir.join(CART_FILE)
    }

    /// Read and parse one document, degrading to `None` on any fault.
    ///
    /// A missing file is normal (first run); an unreadable or corrupt file
    /// is logged and treated as empty, never propagated.
    fn read_document<T: DeserializeOwned>(&self, path: &Path) -> Option<T> {
        if !path.exists() {
            return None;
        }

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read store file, treating as empty");
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "corrupt store file, treating as empty");
                None
            }
        }
    }

    /// Serialize one document and write it, creating the data directory first.
    fn write_document<T: Serialize>(
        &self,
        path: &Path,
        record: &'static str,
        value: &T,
    ) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir).map_err(|e| StorageError::Io {
            path: self.data_dir.display().to_string(),
            reason: e.to_string(),
        })?;

        let text = serde_json::to_string_pretty(value).map_err(|e| {
            StorageError::SerializationFailed {
                record,
                reason: e.to_string(),
            }
        })?;

        fs::write(path, text).map_err(|e| StorageError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

impl ShopStorage for JsonFileStorage {
    fn load_products(&self) -> BTreeMap<ProductId, Product> {
        self.read_document(&self.products_path()).unwrap_or_default()
    }

    fn save_products(&self, products: &BTreeMap<ProductId, Product>) -> Result<(), StorageError> {
        self.write_document(&self.products_path(), "products", products)
    }

    fn load_orders(&self) -> Vec<Order> {
        self.read_document(&self.orders_path()).unwrap_or_default()
    }

    fn save_orders(&self, orders: &[Order]) -> Result<(), StorageError> {
        self.write_document(&self.orders_path(), "orders", &orders)
    }

    fn load_cart(&self) -> Cart {
        self.read_document(&self.cart_path()).unwrap_or_default()
    }

    fn save_cart(&self, cart: &Cart) -> Result<(), StorageError> {
        self.write_document(&self.cart_path(), "cart", cart)
    }
}
