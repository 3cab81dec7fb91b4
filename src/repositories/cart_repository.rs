//! Cart repository.

use std::sync::Arc;

use crate::domain::Cart;
use crate::ports::{ShopStorage, StorageError};

/// Read/write facade for the single session cart.
#[derive(Clone)]
pub struct CartRepository {
    storage: Arc<dyn ShopStorage>,
}

impl CartRepository {
    pub fn new(storage: Arc<dyn ShopStorage>) -> Self {
        Self { storage }
    }

    /// Load the session cart, empty when nothing is persisted.
    pub fn load(&self) -> Cart {
        self.storage.load_cart()
    }

    /// Persist the session cart.
    ///
    /// # Errors
    /// Returns `StorageError` if the write fails.
    pub fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        self.storage.save_cart(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStorage;
    use crate::domain::ProductId;

    #[test]
    fn test_load_default_is_empty() {
        let repo = CartRepository::new(Arc::new(InMemoryStorage::new()));
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let repo = CartRepository::new(Arc::new(InMemoryStorage::new()));

        let mut cart = Cart::new();
        cart.add_item(ProductId::new(1), 4).unwrap();
        repo.save(&cart).unwrap();

        assert_eq!(repo.load(), cart);
    }
}
