//! Product repository.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::{Product, ProductId};
use crate::ports::{ShopStorage, StorageError};

/// Read/write facade for the product catalog.
#[derive(Clone)]
pub struct ProductRepository {
    storage: Arc<dyn ShopStorage>,
}

impl ProductRepository {
    pub fn new(storage: Arc<dyn ShopStorage>) -> Self {
        Self { storage }
    }

    /// All products, keyed by id.
    pub fn get_all(&self) -> BTreeMap<ProductId, Product> {
        self.storage.load_products()
    }

    /// One product, or `None` if the id is unknown.
    pub fn get_by_id(&self, product_id: ProductId) -> Option<Product> {
        self.storage.load_products().remove(&product_id)
    }

    /// Upsert one product by id.
    ///
    /// Re-reads the full catalog, replaces the entry, and rewrites the whole
    /// set.
    ///
    /// # Errors
    /// Returns `StorageError` if the rewrite fails.
    pub fn save(&self, product: &Product) -> Result<(), StorageError> {
        let mut products = self.storage.load_products();
        products.insert(product.id, product.clone());
        self.storage.save_products(&products)
    }

    /// Replace the entire catalog.
    ///
    /// # Errors
    /// Returns `StorageError` if the rewrite fails.
    pub fn save_all(&self, products: &BTreeMap<ProductId, Product>) -> Result<(), StorageError> {
        self.storage.save_products(products)
    }

    /// Delete one product by id.
    ///
    /// Returns `Ok(false)` when the id is absent; the backing set is only
    /// rewritten when an entry was actually removed.
    ///
    /// # Errors
    /// Returns `StorageError` if the rewrite fails.
    pub fn delete(&self, product_id: ProductId) -> Result<bool, StorageError> {
        let mut products = self.storage.load_products();
        if products.remove(&product_id).is_none() {
            return Ok(false);
        }
        self.storage.save_products(&products)?;
        Ok(true)
    }
}
