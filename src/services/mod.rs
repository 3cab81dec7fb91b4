//! Domain services - stateless computations over entity snapshots.
//!
//! Services borrow the collections the data manager owns and are rebuilt for
//! each interaction; they hold no state of their own beyond the borrow.

pub mod cart_service;
pub mod order_service;
pub mod product_service;

pub use cart_service::{CartItem, CartService};
pub use order_service::OrderService;
pub use product_service::ProductService;
