//! Product service - catalog queries over a product snapshot.

use std::collections::BTreeMap;

use crate::domain::{Product, ProductId};

/// Read-only queries over the catalog.
pub struct ProductService<'a> {
    products: &'a BTreeMap<ProductId, Product>,
}

impl<'a> ProductService<'a> {
    pub fn new(products: &'a BTreeMap<ProductId, Product>) -> Self {
        Self { products }
    }

    /// Every product, in map iteration order.
    pub fn get_all_products(&self) -> Vec<&'a Product> {
        self.products.values().collect()
    }

    /// Only products currently in stock.
    pub fn get_available_products(&self) -> Vec<&'a Product> {
        self.products.values().filter(|p| p.in_stock).collect()
    }

    /// One product, or `None` if the id is unknown.
    pub fn get_product(&self, product_id: ProductId) -> Option<&'a Product> {
        self.products.get(&product_id)
    }

    /// Case-insensitive substring search over name and description.
    pub fn search_products(&self, query: &str) -> Vec<&'a Product> {
        let query = query.to_lowercase();
        self.products
            .values()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
            })
            .collect()
    }
}
