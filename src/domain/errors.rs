//! Domain validation errors.
//!
//! These are signals, not failures: callers surface them as a rejected
//! operation and keep going. Nothing in this module is ever fatal.

use thiserror::Error;

/// Errors raised by entity invariant checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("quantity must be greater than zero")]
    InvalidQuantity,

    #[error("product is not in the cart")]
    NotInCart,

    #[error("product name must not be empty")]
    EmptyName,

    #[error("price must not be negative")]
    NegativePrice,
}
