//! Repository layer - per-entity read/write facades over the storage port.
//!
//! Repositories hold no cache of their own: every call re-reads or fully
//! rewrites the backing record set. A `save` on the product or order
//! repository is therefore a read-modify-write of the entire set, which is
//! correct (last write wins) but does not scale past small datasets. That
//! trade-off is deliberate for this store's size.

pub mod cart_repository;
pub mod order_repository;
pub mod product_repository;

pub use cart_repository::CartRepository;
pub use order_repository::OrderRepository;
pub use product_repository::ProductRepository;
