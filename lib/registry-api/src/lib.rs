//! Route catalog records for the platform registry
//!
//! This library defines the records returned by the platform's route catalog:
//! - Backend / BackendSet: concrete endpoints serving a route
//! - RoutesResponse: public hostnames mapped to their backends
//! - InternalRoutesResponse: VIP-addressed internal routes

pub mod v1;

pub use v1::{Backend, BackendSet, InternalRoute, InternalRoutesResponse, RoutesResponse};
