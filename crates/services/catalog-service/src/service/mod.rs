//! Service layer - Business logic implementations.

pub mod catalog_service;

pub use catalog_service::{CatalogManager, CatalogService};
