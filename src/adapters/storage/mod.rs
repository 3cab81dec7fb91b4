//! Storage adapters implementing the [`ShopStorage`](crate::ports::ShopStorage) port.
//!
//! - [`JsonFileStorage`] - one pretty-printed JSON file per record set
//! - [`InMemoryStorage`] - lock-guarded collections for tests and development

mod in_memory_storage;
mod json_file_storage;

pub use in_memory_storage::InMemoryStorage;
pub use json_file_storage::JsonFileStorage;
