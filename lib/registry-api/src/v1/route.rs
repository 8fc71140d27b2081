use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::BackendSet;

/// Public routes known to the catalog, keyed by hostname
///
/// Serialized as a plain hostname map. Iteration order over `backends` is
/// unspecified.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutesResponse {
    pub backends: HashMap<String, BackendSet>,
}

impl RoutesResponse {
    /// Backend set for a public hostname, if the catalog has one
    pub fn backend_set(&self, hostname: &str) -> Option<&BackendSet> {
        self.backends.get(hostname)
    }

    pub fn hostnames(&self) -> impl Iterator<Item = &str> {
        self.backends.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }
}

impl<H: Into<String>> FromIterator<(H, BackendSet)> for RoutesResponse {
    fn from_iter<I: IntoIterator<Item = (H, BackendSet)>>(iter: I) -> Self {
        Self {
            backends: iter.into_iter().map(|(h, set)| (h.into(), set)).collect(),
        }
    }
}
