//! Core service registry model
//!
//! This library provides:
//! - The mesh service model (services, ports, instances)
//! - The service discovery contract registry backends implement
//! - Registry error types

pub mod model;
pub mod discovery;
pub mod error;

pub use model::{
    Labels, NetworkEndpoint, Port, Protocol, Proxy, Resolution, RouteSource, Service,
    ServiceInstance,
};
pub use discovery::ServiceDiscovery;
pub use error::{CatalogQuery, CoreError, Result};
