//! Immutable order snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::cart::Cart;
use super::ids::OrderId;

/// A placed order.
///
/// Orders are created exactly once at checkout and never edited or cancelled
/// afterwards. The embedded cart is an independent copy: mutating the live
/// session cart after checkout must not affect it, which is why `new` takes
/// the cart by value.
///
/// # Invariants
///
/// - `id` is unique and monotonically assigned
/// - `total` is fixed at creation time from the then-current price list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique identifier, assigned at checkout.
    pub id: OrderId,

    /// Frozen snapshot of the cart at checkout time.
    pub cart: Cart,

    /// Total computed at creation from cart quantities and live prices.
    pub total: f64,

    /// Creation timestamp; documents missing the field load as "now".
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Create an order from a cart snapshot.
    pub fn new(id: OrderId, cart: Cart, total: f64) -> Self {
        Self {
            id,
            cart,
            total,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order #{} at {} | total {:.2} | {} line(s)",
            self.id,
            self.created_at.format("%Y-%m-%d %H:%M:%S"),
            self.total,
            self.cart.len()
        )
    }
}
