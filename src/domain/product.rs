//! Catalog product entity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::DomainError;
use super::ids::ProductId;

/// A product in the store catalog.
///
/// # Invariants
///
/// - `name` is non-empty
/// - `price` is non-negative
/// - `id` is unique within the catalog and assigned by the data manager,
///   never by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, assigned at insertion.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Unit price, non-negative.
    pub price: f64,

    /// Whether the product can currently be added to a cart.
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,

    /// Optional image reference.
    #[serde(default)]
    pub image: Option<String>,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Create a new, not-yet-stored product.
    ///
    /// The id is left as [`ProductId::UNASSIGNED`]; the data manager assigns
    /// the real one when the product is added.
    ///
    /// # Errors
    ///
    /// - `EmptyName` if the name is empty or whitespace
    /// - `NegativePrice` if the price is below zero
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        in_stock: bool,
        image: Option<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        Self::validate_name(&name)?;
        Self::validate_price(price)?;

        Ok(Self {
            id: ProductId::UNASSIGNED,
            name,
            description: description.into(),
            price,
            in_stock,
            image,
        })
    }

    pub(crate) fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(())
    }

    pub(crate) fn validate_price(price: f64) -> Result<(), DomainError> {
        if price < 0.0 {
            return Err(DomainError::NegativePrice);
        }
        Ok(())
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.in_stock {
            "in stock"
        } else {
            "out of stock"
        };
        write!(f, "[{}] {} - {:.2} | {}", self.id, self.name, self.price, status)
    }
}
