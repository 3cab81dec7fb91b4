//! Domain layer containing the store entities and their invariants.
//!
//! # Module Organization
//!
//! - `ids` - Strongly-typed identifiers for products and orders
//! - `product` - Catalog product entity
//! - `cart` - Shopping cart quantity ledger
//! - `order` - Immutable order snapshot
//! - `errors` - Domain validation errors

pub mod cart;
pub mod errors;
pub mod ids;
pub mod order;
pub mod product;

pub use cart::Cart;
pub use errors::DomainError;
pub use ids::{OrderId, ProductId};
pub use order::Order;
pub use product::Product;
