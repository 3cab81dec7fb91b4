//! Shop Ships - layered storefront core.
//!
//! This crate implements the catalog, cart, and order slice of a small
//! e-commerce store over flat JSON files: entities, a storage port with file
//! and in-memory adapters, per-entity repositories, a data manager owning the
//! canonical in-memory state, and stateless domain services.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod repositories;
pub mod services;
