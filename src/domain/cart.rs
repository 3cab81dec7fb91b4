//! Shopping cart quantity ledger.
//!
//! The cart maps product ids to positive quantities and nothing more. It does
//! not know whether the ids still resolve to live products; that join happens
//! in [`crate::services::CartService`], which consumes a catalog snapshot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::errors::DomainError;
use super::ids::ProductId;
use super::product::Product;

/// Quantity ledger keyed by product id.
///
/// # Invariants
///
/// - Every stored quantity is strictly positive; a line that would reach
///   zero is removed instead
/// - Keys are unique (map semantics)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    items: BTreeMap<ProductId, u32>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of a product, accumulating with any existing line.
    ///
    /// # Errors
    ///
    /// - `InvalidQuantity` if `quantity` is zero
    pub fn add_item(&mut self, product_id: ProductId, quantity: u32) -> Result<(), DomainError> {
        if quantity == 0 {
            return Err(DomainError::InvalidQuantity);
        }

        *self.items.entry(product_id).or_insert(0) += quantity;
        Ok(())
    }

    /// Remove `quantity` units of a product.
    ///
    /// Removing at least the current quantity deletes the line entirely.
    ///
    /// # Errors
    ///
    /// - `NotInCart` if the product has no line in the cart
    /// - `InvalidQuantity` if `quantity` is zero
    pub fn remove_item(&mut self, product_id: ProductId, quantity: u32) -> Result<(), DomainError> {
        let current = *self.items.get(&product_id).ok_or(DomainError::NotInCart)?;

        if quantity == 0 {
            return Err(DomainError::InvalidQuantity);
        }

        if current <= quantity {
            self.items.remove(&product_id);
        } else {
            self.items.insert(product_id, current - quantity);
        }
        Ok(())
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total cost of the cart against a catalog snapshot.
    ///
    /// Lines whose product id is missing from the snapshot contribute zero;
    /// a cart may legitimately reference products deleted since it was built.
    pub fn calculate_total(&self, products: &BTreeMap<ProductId, Product>) -> f64 {
        self.items
            .iter()
            .filter_map(|(id, qty)| products.get(id).map(|p| p.price * f64::from(*qty)))
            .sum()
    }

    /// Sum of all quantities, not the number of distinct lines.
    pub fn items_count(&self) -> u32 {
        self.items.values().sum()
    }

    /// Current quantity for a product, zero when absent.
    pub fn quantity(&self, product_id: ProductId) -> u32 {
        self.items.get(&product_id).copied().unwrap_or(0)
    }

    /// Whether the cart has a line for the product.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.items.contains_key(&product_id)
    }

    /// The underlying lines, ordered by product id.
    pub fn items(&self) -> &BTreeMap<ProductId, u32> {
        &self.items
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
