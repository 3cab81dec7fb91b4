//! Application layer - the data manager orchestrating repositories and
//! in-memory state.

pub mod data_manager;

pub use data_manager::{DataError, DataManager, ProductUpdate, Statistics};
