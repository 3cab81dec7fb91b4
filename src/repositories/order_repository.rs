//! Order repository.

use std::sync::Arc;

use crate::domain::{Order, OrderId};
use crate::ports::{ShopStorage, StorageError};

/// Read/write facade for the order log.
#[derive(Clone)]
pub struct OrderRepository {
    storage: Arc<dyn ShopStorage>,
}

impl OrderRepository {
    pub fn new(storage: Arc<dyn ShopStorage>) -> Self {
        Self { storage }
    }

    /// All orders in placement order.
    pub fn get_all(&self) -> Vec<Order> {
        self.storage.load_orders()
    }

    /// One order, or `None` if the id is unknown. Linear scan.
    pub fn get_by_id(&self, order_id: OrderId) -> Option<Order> {
        self.storage
            .load_orders()
            .into_iter()
            .find(|o| o.id == order_id)
    }

    /// Append one order to the log.
    ///
    /// Re-reads the full log, appends, and rewrites the whole list.
    ///
    /// # Errors
    /// Returns `StorageError` if the rewrite fails.
    pub fn save(&self, order: &Order) -> Result<(), StorageError> {
        let mut orders = self.storage.load_orders();
        orders.push(order.clone());
        self.storage.save_orders(&orders)
    }

    /// Replace the entire order log.
    ///
    /// # Errors
    /// Returns `StorageError` if the rewrite fails.
    pub fn save_all(&self, orders: &[Order]) -> Result<(), StorageError> {
        self.storage.save_orders(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStorage;
    use crate::domain::Cart;

    fn repo() -> OrderRepository {
        OrderRepository::new(Arc::new(InMemoryStorage::new()))
    }

    fn order(id: u64, total: f64) -> Order {
        Order::new(OrderId::new(id), Cart::new(), total)
    }

    #[test]
    fn test_save_appends() {
        let repo = repo();
        repo.save(&order(1, 10.0)).unwrap();
        repo.save(&order(2, 20.0)).unwrap();

        let orders = repo.get_all();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, OrderId::new(1));
        assert_eq!(orders[1].id, OrderId::new(2));
    }

    #[test]
    fn test_get_by_id() {
        let repo = repo();
        repo.save(&order(1, 10.0)).unwrap();

        assert!(repo.get_by_id(OrderId::new(1)).is_some());
        assert!(repo.get_by_id(OrderId::new(99)).is_none());
    }

    #[test]
    fn test_save_all_replaces_log() {
        let repo = repo();
        repo.save(&order(1, 10.0)).unwrap();

        repo.save_all(&[order(5, 1.0), order(6, 2.0)]).unwrap();
        let orders = repo.get_all();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, OrderId::new(5));
    }
}
