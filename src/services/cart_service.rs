//! Cart service - cart mutations validated against a catalog snapshot.

use std::collections::BTreeMap;

use crate::domain::{Cart, Product, ProductId};

/// One cart line joined with its resolved product.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem<'a> {
    pub product: &'a Product,
    pub quantity: u32,
}

/// Wraps one cart and one product snapshot for a single interaction.
///
/// Add and remove are deliberately asymmetric: adding requires the product to
/// exist and be in stock, while removing only requires the line to be in the
/// cart. A shopper must always be able to take an out-of-stock or deleted
/// product back out.
pub struct CartService<'a> {
    cart: &'a mut Cart,
    products: &'a BTreeMap<ProductId, Product>,
}

impl<'a> CartService<'a> {
    pub fn new(cart: &'a mut Cart, products: &'a BTreeMap<ProductId, Product>) -> Self {
        Self { cart, products }
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// Returns `false` when the product is unknown, out of stock, or the
    /// quantity is zero; the cart is left untouched in those cases.
    pub fn add_product(&mut self, product_id: ProductId, quantity: u32) -> bool {
        let Some(product) = self.products.get(&product_id) else {
            return false;
        };
        if !product.in_stock {
            return false;
        }

        self.cart.add_item(product_id, quantity).is_ok()
    }

    /// Remove `quantity` units of a product from the cart.
    ///
    /// Returns `false` when the line is absent or the quantity is zero.
    /// Removing at least the current quantity deletes the line.
    pub fn remove_product(&mut self, product_id: ProductId, quantity: u32) -> bool {
        self.cart.remove_item(product_id, quantity).is_ok()
    }

    /// Remove every line.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Total cost of the cart; lines with stale product ids contribute zero.
    pub fn get_total(&self) -> f64 {
        self.cart.calculate_total(self.products)
    }

    /// Sum of all quantities in the cart.
    pub fn get_items_count(&self) -> u32 {
        self.cart.items_count()
    }

    /// Cart lines joined with their products, omitting stale ids.
    pub fn get_cart_items(&self) -> Vec<CartItem<'_>> {
        self.cart
            .items()
            .iter()
            .filter_map(|(id, qty)| {
                self.products.get(id).map(|product| CartItem {
                    product,
                    quantity: *qty,
                })
            })
            .collect()
    }

    /// The wrapped cart.
    pub fn cart(&self) -> &Cart {
        self.cart
    }
}
