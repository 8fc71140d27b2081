use serde::{Deserialize, Serialize};

use super::BackendSet;

/// A hostname bound to an internal virtual address, used for mesh-internal traffic
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalRoute {
    /// Internal hostname (e.g., "orders.apps.internal")
    pub hostname: String,

    /// Virtual IP representing the route as a single stable address
    pub vip: String,

    /// Backends serving the route
    #[serde(default)]
    pub backends: BackendSet,
}

/// Internal routes in catalog order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalRoutesResponse {
    #[serde(default)]
    pub internal_routes: Vec<InternalRoute>,
}

impl InternalRoutesResponse {
    /// Internal routes whose hostname matches exactly, in catalog order
    pub fn matching<'a>(&'a self, hostname: &'a str) -> impl Iterator<Item = &'a InternalRoute> + 'a {
        self.internal_routes
            .iter()
            .filter(move |route| route.hostname == hostname)
    }

    pub fn len(&self) -> usize {
        self.internal_routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.internal_routes.is_empty()
    }
}
