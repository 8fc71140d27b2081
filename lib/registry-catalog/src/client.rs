//! Catalog query clients

use anyhow::{Context, Result};
use registry_api::{InternalRoute, InternalRoutesResponse, RoutesResponse};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Query capability of the platform route catalog
///
/// Implementations own the transport; every call goes to the source of truth.
#[async_trait::async_trait]
pub trait CatalogClient: Send + Sync {
    /// Public hostnames mapped to their backend sets
    async fn routes(&self) -> Result<RoutesResponse>;

    /// VIP-addressed internal routes, in catalog order
    async fn internal_routes(&self) -> Result<InternalRoutesResponse>;
}

#[async_trait::async_trait]
impl<C: CatalogClient + ?Sized> CatalogClient for Arc<C> {
    async fn routes(&self) -> Result<RoutesResponse> {
        (**self).routes().await
    }

    async fn internal_routes(&self) -> Result<InternalRoutesResponse> {
        (**self).internal_routes().await
    }
}

/// Point-in-time copy of the whole catalog
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub routes: RoutesResponse,

    #[serde(default)]
    pub internal_routes: Vec<InternalRoute>,
}

/// CatalogClient serving a fixed snapshot
pub struct StaticCatalog {
    snapshot: CatalogSnapshot,
}

impl StaticCatalog {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        Self { snapshot }
    }

    /// Parse a YAML snapshot
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let snapshot: CatalogSnapshot =
            serde_yaml::from_str(yaml).context("parsing catalog snapshot")?;
        debug!(
            "Loaded catalog snapshot with {} routes and {} internal routes",
            snapshot.routes.len(),
            snapshot.internal_routes.len()
        );
        Ok(Self::new(snapshot))
    }

    /// Load a YAML snapshot from disk
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let yaml = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading catalog snapshot {}", path.display()))?;
        Self::from_yaml_str(&yaml)
    }
}

#[async_trait::async_trait]
impl CatalogClient for StaticCatalog {
    async fn routes(&self) -> Result<RoutesResponse> {
        Ok(self.snapshot.routes.clone())
    }

    async fn internal_routes(&self) -> Result<InternalRoutesResponse> {
        Ok(InternalRoutesResponse {
            internal_routes: self.snapshot.internal_routes.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registry_api::Backend;

    const SNAPSHOT: &str = r#"
routes:
  a.apps.internal:
    - address: 10.0.0.1
      port: 80
    - address: 10.0.0.2
      port: 80
internal_routes:
  - hostname: b.internal
    vip: 10.255.0.5
    backends:
      - address: 10.0.1.1
        port: 6000
"#;

    #[tokio::test]
    async fn test_static_catalog_from_yaml() {
        let catalog = StaticCatalog::from_yaml_str(SNAPSHOT).expect("valid snapshot");

        let routes = catalog.routes().await.expect("routes");
        let set = routes.backend_set("a.apps.internal").expect("public route");
        assert_eq!(
            set.backends,
            vec![Backend::new("10.0.0.1", 80), Backend::new("10.0.0.2", 80)]
        );

        let internal = catalog.internal_routes().await.expect("internal routes");
        assert_eq!(internal.len(), 1);
        assert_eq!(internal.internal_routes[0].vip, "10.255.0.5");
    }

    #[test]
    fn test_snapshot_serializes_flat() {
        let catalog = StaticCatalog::from_yaml_str(SNAPSHOT).expect("valid snapshot");
        let value = serde_yaml::to_value(&catalog.snapshot).expect("serializable snapshot");
        assert!(value["routes"]["a.apps.internal"].is_sequence());
        assert!(value["internal_routes"][0]["backends"].is_sequence());
    }

    #[tokio::test]
    async fn test_empty_snapshot() {
        let catalog = StaticCatalog::from_yaml_str("{}").expect("empty snapshot");
        assert!(catalog.routes().await.expect("routes").is_empty());
        assert!(catalog.internal_routes().await.expect("internal routes").is_empty());
    }

    #[test]
    fn test_invalid_snapshot() {
        let err = StaticCatalog::from_yaml_str("routes: not-a-map").err().expect("invalid snapshot");
        assert!(err.to_string().contains("parsing catalog snapshot"));
    }

    #[tokio::test]
    async fn test_missing_snapshot_file() {
        let err = StaticCatalog::from_path("/nonexistent/catalog.yaml")
            .await
            .err()
            .expect("missing file");
        assert!(err.to_string().contains("/nonexistent/catalog.yaml"));
    }

    #[tokio::test]
    async fn test_shared_client() {
        let catalog: Arc<dyn CatalogClient> =
            Arc::new(StaticCatalog::from_yaml_str(SNAPSHOT).expect("valid snapshot"));
        assert_eq!(catalog.routes().await.expect("routes").len(), 1);
    }
}
