//! Platform route catalog integration
pub mod client;
pub mod discovery;

pub use client::{CatalogClient, CatalogSnapshot, StaticCatalog};
pub use discovery::CatalogServiceDiscovery;
