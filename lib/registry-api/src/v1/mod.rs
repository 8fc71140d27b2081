/// API version v1 of the platform route catalog

pub mod backend;
pub mod route;
pub mod internal_route;

pub use backend::{Backend, BackendSet};
pub use route::RoutesResponse;
pub use internal_route::{InternalRoute, InternalRoutesResponse};
