//! DataManager - single point of truth for store data within a process.
//!
//! The manager owns the canonical in-memory product map and order log, and is
//! the only writer to persisted state. It allocates ids by recomputing
//! `max + 1` at load time, which is the sole uniqueness mechanism: two
//! managers initialized concurrently against the same files can hand out the
//! same id. Single-user operation is assumed throughout.
//!
//! When a save fails, the in-memory state has already moved ahead of the
//! files; the error is returned so the caller can surface it, but the
//! divergence is not rolled back.

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::{Cart, DomainError, Order, OrderId, Product, ProductId};
use crate::ports::{ShopStorage, StorageError};
use crate::repositories::{CartRepository, OrderRepository, ProductRepository};

/// Errors surfaced by data manager operations.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Partial update for a product; only supplied fields are overwritten.
///
/// `image` is doubly optional so the caller can distinguish "leave it alone"
/// (`None`) from "clear it" (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub in_stock: Option<bool>,
    pub image: Option<Option<String>>,
}

/// Aggregate store statistics for the admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total_products: usize,
    pub available_products: usize,
    pub total_orders: usize,
    pub total_revenue: f64,
    /// Revenue divided by order count; 0.0 when there are no orders.
    pub average_order_value: f64,
}

/// Orchestrator owning the in-memory collections and id allocation.
pub struct DataManager {
    products: BTreeMap<ProductId, Product>,
    orders: Vec<Order>,
    next_product_id: u64,
    next_order_id: u64,
    product_repo: ProductRepository,
    order_repo: OrderRepository,
    cart_repo: CartRepository,
}

impl DataManager {
    /// Build a manager over the given storage and load everything.
    pub fn new(storage: Arc<dyn ShopStorage>) -> Self {
        let mut manager = Self {
            products: BTreeMap::new(),
            orders: Vec::new(),
            next_product_id: 1,
            next_order_id: 1,
            product_repo: ProductRepository::new(Arc::clone(&storage)),
            order_repo: OrderRepository::new(Arc::clone(&storage)),
            cart_repo: CartRepository::new(storage),
        };
        manager.load_all_data();
        manager
    }

    /// Repopulate the in-memory collections and recompute the next ids.
    ///
    /// Next ids are one more than the current maximum (1 when empty), so ids
    /// are never reused within one manager lifetime, even after deletions.
    pub fn load_all_data(&mut self) {
        self.products = self.product_repo.get_all();
        self.next_product_id = self
            .products
            .keys()
            .map(|id| id.as_u64())
            .max()
            .map_or(1, |max| max + 1);

        self.orders = self.order_repo.get_all();
        self.next_order_id = self
            .orders
            .iter()
            .map(|o| o.id.as_u64())
            .max()
            .map_or(1, |max| max + 1);

        info!(
            products = self.products.len(),
            orders = self.orders.len(),
            "store data loaded"
        );
    }

    /// Persist both the product catalog and the order log.
    ///
    /// # Errors
    /// Returns the first `StorageError`; the two saves are not atomic.
    pub fn save_all_data(&self) -> Result<(), DataError> {
        self.product_repo.save_all(&self.products)?;
        self.order_repo.save_all(&self.orders)?;
        Ok(())
    }

    // ── Products ────────────────────────────────────────────────────────

    /// The canonical product map.
    pub fn products(&self) -> &BTreeMap<ProductId, Product> {
        &self.products
    }

    /// One product, or `None` if the id is unknown.
    pub fn get_product(&self, product_id: ProductId) -> Option<&Product> {
        self.products.get(&product_id)
    }

    /// Add a product, assigning the next available id.
    ///
    /// Any id set by the caller is ignored. Returns the stored entity with
    /// its assigned id.
    ///
    /// # Errors
    /// Returns `DataError::Storage` if persisting the catalog fails.
    pub fn add_product(&mut self, mut product: Product) -> Result<Product, DataError> {
        product.id = ProductId::new(self.next_product_id);
        self.next_product_id += 1;

        self.products.insert(product.id, product.clone());
        self.product_repo.save_all(&self.products)?;

        debug!(product_id = %product.id, name = %product.name, "product added");
        Ok(product)
    }

    /// Partially update a product.
    ///
    /// Returns `Ok(None)` when the id is unknown. Supplied name and price
    /// values are validated before anything is touched.
    ///
    /// # Errors
    /// Returns `DataError::Domain` on invalid fields, `DataError::Storage` if
    /// persisting fails.
    pub fn update_product(
        &mut self,
        product_id: ProductId,
        update: ProductUpdate,
    ) -> Result<Option<Product>, DataError> {
        if !self.products.contains_key(&product_id) {
            return Ok(None);
        }

        if let Some(name) = &update.name {
            Product::validate_name(name)?;
        }
        if let Some(price) = update.price {
            Product::validate_price(price)?;
        }

        let Some(product) = self.products.get_mut(&product_id) else {
            return Ok(None);
        };

        if let Some(name) = update.name {
            product.name = name;
        }
        if let Some(description) = update.description {
            product.description = description;
        }
        if let Some(price) = update.price {
            product.price = price;
        }
        if let Some(in_stock) = update.in_stock {
            product.in_stock = in_stock;
        }
        if let Some(image) = update.image {
            product.image = image;
        }

        let updated = product.clone();
        self.product_repo.save_all(&self.products)?;

        debug!(product_id = %product_id, "product updated");
        Ok(Some(updated))
    }

    /// Delete a product.
    ///
    /// Returns `Ok(false)` when the id is unknown. The in-memory entry is
    /// removed only after the persistence delete succeeds.
    ///
    /// # Errors
    /// Returns `DataError::Storage` if the persistence delete fails; memory
    /// is left untouched in that case.
    pub fn delete_product(&mut self, product_id: ProductId) -> Result<bool, DataError> {
        if !self.products.contains_key(&product_id) {
            return Ok(false);
        }

        self.product_repo.delete(product_id)?;
        self.products.remove(&product_id);

        debug!(product_id = %product_id, "product deleted");
        Ok(true)
    }

    // ── Orders ──────────────────────────────────────────────────────────

    /// All orders in placement order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// One order, or `None` if the id is unknown. Linear scan.
    pub fn get_order(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// Create an order from the cart at the current prices.
    ///
    /// The total sums price x quantity over cart lines whose product still
    /// exists in the catalog; lines referencing deleted products are silently
    /// excluded (best effort, not a validation error). The order stores a
    /// deep copy of the cart, so later cart mutation cannot alter it.
    ///
    /// # Errors
    /// Returns `DataError::Storage` if appending to the order log fails.
    pub fn create_order(&mut self, cart: &Cart) -> Result<Order, DataError> {
        let total = cart.calculate_total(&self.products);

        let order = Order::new(OrderId::new(self.next_order_id), cart.clone(), total);
        self.next_order_id += 1;

        self.order_repo.save(&order)?;
        self.orders.push(order.clone());

        info!(order_id = %order.id, total = order.total, "order created");
        Ok(order)
    }

    // ── Cart (session state) ────────────────────────────────────────────

    /// Load the session cart from storage.
    pub fn load_cart(&self) -> Cart {
        self.cart_repo.load()
    }

    /// Persist the session cart.
    ///
    /// # Errors
    /// Returns `DataError::Storage` if the write fails.
    pub fn save_cart(&self, cart: &Cart) -> Result<(), DataError> {
        self.cart_repo.save(cart)?;
        Ok(())
    }

    // ── Statistics ──────────────────────────────────────────────────────

    /// Aggregate counts and revenue for the admin dashboard.
    pub fn statistics(&self) -> Statistics {
        let total_orders = self.orders.len();
        let total_revenue: f64 = self.orders.iter().map(|o| o.total).sum();
        let average_order_value = if total_orders > 0 {
            total_revenue / total_orders as f64
        } else {
            0.0
        };

        Statistics {
            total_products: self.products.len(),
            available_products: self.products.values().filter(|p| p.in_stock).count(),
            total_orders,
            total_revenue,
            average_order_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStorage;

    fn manager() -> DataManager {
        DataManager::new(Arc::new(InMemoryStorage::new()))
    }

    fn draft(name: &str, price: f64, in_stock: bool) -> Product {
        Product::new(name, "", price, in_stock, None).unwrap()
    }

    #[test]
    fn test_add_product_assigns_sequential_ids() {
        let mut manager = manager();

        let first = manager.add_product(draft("Widget", 9.99, true)).unwrap();
        let second = manager.add_product(draft("Gadget", 4.5, true)).unwrap();

        assert_eq!(first.id, ProductId::new(1));
        assert_eq!(second.id, ProductId::new(2));
    }

    #[test]
    fn test_add_product_ignores_caller_id() {
        let mut manager = manager();

        let mut product = draft("Widget", 1.0, true);
        product.id = ProductId::new(999);

        let stored = manager.add_product(product).unwrap();
        assert_eq!(stored.id, ProductId::new(1));
    }

    #[test]
    fn test_ids_never_reused_after_delete() {
        let mut manager = manager();

        let first = manager.add_product(draft("Widget", 1.0, true)).unwrap();
        let second = manager.add_product(draft("Gadget", 2.0, true)).unwrap();
        assert!(manager.delete_product(second.id).unwrap());
        assert!(manager.delete_product(first.id).unwrap());

        let third = manager.add_product(draft("Gizmo", 3.0, true)).unwrap();
        assert_eq!(third.id, ProductId::new(3));
    }

    #[test]
    fn test_next_ids_recomputed_from_storage() {
        let storage = Arc::new(InMemoryStorage::new());

        {
            let mut manager = DataManager::new(Arc::clone(&storage) as Arc<dyn ShopStorage>);
            manager.add_product(draft("Widget", 9.99, true)).unwrap();
            let mut cart = Cart::new();
            cart.add_item(ProductId::new(1), 1).unwrap();
            manager.create_order(&cart).unwrap();
        }

        // A fresh manager over the same storage continues the sequences
        let mut manager = DataManager::new(storage);
        let product = manager.add_product(draft("Gadget", 1.0, true)).unwrap();
        assert_eq!(product.id, ProductId::new(2));

        let order = manager.create_order(&Cart::new()).unwrap();
        assert_eq!(order.id, OrderId::new(2));
    }

    #[test]
    fn test_update_product_partial() {
        let mut manager = manager();
        let product = manager.add_product(draft("Widget", 9.99, true)).unwrap();

        let updated = manager
            .update_product(
                product.id,
                ProductUpdate {
                    price: Some(12.5),
                    in_stock: Some(false),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Widget");
        assert!((updated.price - 12.5).abs() < 1e-9);
        assert!(!updated.in_stock);
    }

    #[test]
    fn test_update_unknown_product_returns_none() {
        let mut manager = manager();
        let result = manager
            .update_product(ProductId::new(42), ProductUpdate::default())
            .unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_update_rejects_invalid_fields() {
        let mut manager = manager();
        let product = manager.add_product(draft("Widget", 9.99, true)).unwrap();

        let err = manager
            .update_product(
                product.id,
                ProductUpdate {
                    price: Some(-1.0),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, DataError::Domain(DomainError::NegativePrice)));

        let err = manager
            .update_product(
                product.id,
                ProductUpdate {
                    name: Some("  ".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, DataError::Domain(DomainError::EmptyName)));

        // Nothing was overwritten by the rejected updates
        assert_eq!(manager.get_product(product.id).unwrap().name, "Widget");
    }

    #[test]
    fn test_update_can_clear_image() {
        let mut manager = manager();
        let product = manager
            .add_product(Product::new("Widget", "", 1.0, true, Some("w.png".into())).unwrap())
            .unwrap();

        let updated = manager
            .update_product(
                product.id,
                ProductUpdate {
                    image: Some(None),
                    ..Default::default()
                },
            )
            .unwrap()
            .unwrap();
        assert!(updated.image.is_none());
    }

    #[test]
    fn test_delete_product() {
        let mut manager = manager();
        let product = manager.add_product(draft("Widget", 1.0, true)).unwrap();

        assert!(manager.delete_product(product.id).unwrap());
        assert!(manager.get_product(product.id).is_none());
        assert!(!manager.delete_product(product.id).unwrap());
    }

    #[test]
    fn test_create_order_snapshots_cart_and_total() {
        let mut manager = manager();
        let product = manager.add_product(draft("Widget", 9.99, true)).unwrap();

        let mut cart = Cart::new();
        cart.add_item(product.id, 3).unwrap();

        let order = manager.create_order(&cart).unwrap();
        assert_eq!(order.id, OrderId::new(1));
        assert!((order.total - 29.97).abs() < 1e-9);

        // Mutating the live cart afterwards leaves the order untouched
        cart.clear();
        let stored = manager.get_order(order.id).unwrap();
        assert_eq!(stored.cart.quantity(product.id), 3);
        assert!((stored.total - 29.97).abs() < 1e-9);
    }

    #[test]
    fn test_create_order_excludes_deleted_products_from_total() {
        let mut manager = manager();
        let kept = manager.add_product(draft("Widget", 10.0, true)).unwrap();
        let gone = manager.add_product(draft("Gadget", 99.0, true)).unwrap();

        let mut cart = Cart::new();
        cart.add_item(kept.id, 2).unwrap();
        cart.add_item(gone.id, 1).unwrap();

        manager.delete_product(gone.id).unwrap();

        let order = manager.create_order(&cart).unwrap();
        assert!((order.total - 20.0).abs() < 1e-9);
        // The stale line is still part of the snapshot, it just priced at zero
        assert_eq!(order.cart.quantity(gone.id), 1);
    }

    #[test]
    fn test_order_total_survives_later_product_deletion() {
        let mut manager = manager();
        let product = manager.add_product(draft("Widget", 9.99, true)).unwrap();

        let mut cart = Cart::new();
        cart.add_item(product.id, 3).unwrap();
        let order = manager.create_order(&cart).unwrap();

        manager.delete_product(product.id).unwrap();
        assert!((manager.get_order(order.id).unwrap().total - 29.97).abs() < 1e-9);
    }

    #[test]
    fn test_cart_roundtrip_through_manager() {
        let manager = manager();

        let mut cart = manager.load_cart();
        assert!(cart.is_empty());

        cart.add_item(ProductId::new(1), 2).unwrap();
        manager.save_cart(&cart).unwrap();

        assert_eq!(manager.load_cart(), cart);
    }

    #[test]
    fn test_statistics() {
        let mut manager = manager();

        let stats = manager.statistics();
        assert_eq!(stats.total_orders, 0);
        assert_eq!(stats.average_order_value, 0.0);

        let widget = manager.add_product(draft("Widget", 10.0, true)).unwrap();
        manager.add_product(draft("Gadget", 5.0, false)).unwrap();

        let mut cart = Cart::new();
        cart.add_item(widget.id, 1).unwrap();
        manager.create_order(&cart).unwrap();
        cart.clear();
        cart.add_item(widget.id, 3).unwrap();
        manager.create_order(&cart).unwrap();

        let stats = manager.statistics();
        assert_eq!(stats.total_products, 2);
        assert_eq!(stats.available_products, 1);
        assert_eq!(stats.total_orders, 2);
        assert!((stats.total_revenue - 40.0).abs() < 1e-9);
        assert!((stats.average_order_value - 20.0).abs() < 1e-9);
    }
}
