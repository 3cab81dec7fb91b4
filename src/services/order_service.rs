//! Order service - aggregate queries over the order log.

use crate::domain::{Order, OrderId};

/// Read-only queries over placed orders.
pub struct OrderService<'a> {
    orders: &'a [Order],
}

impl<'a> OrderService<'a> {
    pub fn new(orders: &'a [Order]) -> Self {
        Self { orders }
    }

    /// All orders in placement order.
    pub fn get_all_orders(&self) -> &'a [Order] {
        self.orders
    }

    /// One order, or `None` if the id is unknown. Linear scan.
    pub fn get_order(&self, order_id: OrderId) -> Option<&'a Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// Number of placed orders.
    pub fn get_orders_count(&self) -> usize {
        self.orders.len()
    }

    /// Sum of all order totals.
    pub fn get_total_revenue(&self) -> f64 {
        self.orders.iter().map(|o| o.total).sum()
    }

    /// Revenue divided by order count; 0.0 when there are no orders.
    pub fn get_average_order_value(&self) -> f64 {
        if self.orders.is_empty() {
            return 0.0;
        }
        self.get_total_revenue() / self.orders.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cart;

    fn order(id: u64, total: f64) -> Order {
        Order::new(OrderId::new(id), Cart::new(), total)
    }

    #[test]
    fn test_empty_log() {
        let orders = vec![];
        let service = OrderService::new(&orders);

        assert_eq!(service.get_orders_count(), 0);
        assert_eq!(service.get_total_revenue(), 0.0);
        assert_eq!(service.get_average_order_value(), 0.0);
    }

    #[test]
    fn test_revenue_is_sum_of_totals() {
        let orders = vec![order(1, 10.0), order(2, 25.5), order(3, 4.5)];
        let service = OrderService::new(&orders);

        assert_eq!(service.get_orders_count(), 3);
        assert!((service.get_total_revenue() - 40.0).abs() < 1e-9);
        assert!((service.get_average_order_value() - 40.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_get_order_linear_scan() {
        let orders = vec![order(1, 10.0), order(2, 20.0)];
        let service = OrderService::new(&orders);

        assert_eq!(service.get_order(OrderId::new(2)).unwrap().total, 20.0);
        assert!(service.get_order(OrderId::new(5)).is_none());
    }
}
