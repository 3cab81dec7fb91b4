//! Ports - interfaces between the store core and its infrastructure.
//!
//! Following hexagonal architecture, ports define the contracts the
//! repositories depend on; adapters provide the concrete implementations.

pub mod storage;

pub use storage::{ShopStorage, StorageError};
