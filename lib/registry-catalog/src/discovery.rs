//! Projection of the platform route catalog into the mesh service model

use crate::CatalogClient;
use registry_api::{InternalRoutesResponse, RoutesResponse};
use registry_core::{
    CatalogQuery, CoreError, Labels, NetworkEndpoint, Port, Proxy, Result, Service,
    ServiceDiscovery, ServiceInstance,
};
use tracing::{debug, warn};

/// ServiceDiscovery backed by the platform route catalog
///
/// Stateless: every call queries the catalog afresh. Public routes become
/// HTTP services, internal routes become TCP services addressed by their VIP.
pub struct CatalogServiceDiscovery<C> {
    client: C,
    // All platform apps listen on this one port
    service_port: u16,
}

impl<C: CatalogClient> CatalogServiceDiscovery<C> {
    /// Create a registry over a connected catalog client
    pub fn new(client: C, service_port: u16) -> Self {
        Self {
            client,
            service_port,
        }
    }

    pub fn service_port(&self) -> u16 {
        self.service_port
    }

    /// Port advertised by public routes
    pub fn default_service_port(&self) -> Port {
        Port::http(self.service_port)
    }

    async fn fetch_routes(&self, context: &'static str) -> Result<RoutesResponse> {
        self.client.routes().await.map_err(|e| {
            warn!("Catalog routes query failed: {:#}", e);
            CoreError::catalog(context, CatalogQuery::Routes, e)
        })
    }

    async fn fetch_internal_routes(&self, context: &'static str) -> Result<InternalRoutesResponse> {
        self.client.internal_routes().await.map_err(|e| {
            warn!("Catalog internal routes query failed: {:#}", e);
            CoreError::catalog(context, CatalogQuery::InternalRoutes, e)
        })
    }
}

#[async_trait::async_trait]
impl<C: CatalogClient> ServiceDiscovery for CatalogServiceDiscovery<C> {
    async fn services(&self) -> Result<Vec<Service>> {
        let routes = self.fetch_routes("getting services").await?;
        let internal_routes = self.fetch_internal_routes("getting services").await?;

        let mut services = Vec::with_capacity(routes.len() + internal_routes.len());

        let port = self.default_service_port();
        for hostname in routes.hostnames() {
            services.push(Service::public(hostname, port.clone()));
        }

        let internal_port = Port::tcp(self.service_port);
        for route in &internal_routes.internal_routes {
            services.push(Service::internal(
                route.hostname.as_str(),
                route.vip.as_str(),
                internal_port.clone(),
            ));
        }

        debug!(
            "Projected {} services ({} public, {} internal)",
            services.len(),
            routes.len(),
            internal_routes.len()
        );
        Ok(services)
    }

    async fn get_service(&self, hostname: &str) -> Result<Option<Service>> {
        let services = self.services().await?;
        Ok(services.into_iter().find(|svc| svc.hostname == hostname))
    }

    async fn instances(
        &self,
        hostname: &str,
        _ports: &[String],
        _labels: &Labels,
    ) -> Result<Vec<ServiceInstance>> {
        debug!("Rejecting instances lookup for {}", hostname);
        Err(CoreError::NotImplemented)
    }

    /// Every backend of `hostname` across public and internal routes
    ///
    /// `ports` and `labels` are accepted for contract compatibility and
    /// ignored: apps expose a single port and the platform has no labels.
    async fn instances_by_port(
        &self,
        hostname: &str,
        _ports: &[u16],
        _labels: &Labels,
    ) -> Result<Vec<ServiceInstance>> {
        let routes = self.fetch_routes("getting routes").await?;
        let mut instances = Vec::new();

        if let Some(backend_set) = routes.backend_set(hostname) {
            let port = self.default_service_port();
            for backend in backend_set {
                instances.push(ServiceInstance {
                    endpoint: NetworkEndpoint {
                        address: backend.address.clone(),
                        port: backend.port,
                        service_port: port.clone(),
                    },
                    service: Service::public(hostname, port.clone()),
                });
            }
        }

        let internal_routes = self.fetch_internal_routes("getting internal routes").await?;
        let internal_port = Port::tcp(self.service_port);
        for route in internal_routes.matching(hostname) {
            for backend in &route.backends {
                instances.push(ServiceInstance {
                    endpoint: NetworkEndpoint {
                        address: backend.address.clone(),
                        port: backend.port,
                        service_port: internal_port.clone(),
                    },
                    service: Service::internal(hostname, route.vip.as_str(), internal_port.clone()),
                });
            }
        }

        debug!("Found {} instances for {}", instances.len(), hostname);
        Ok(instances)
    }

    /// Always empty: the platform runs no sidecar-attached workloads
    async fn proxy_service_instances(&self, _proxy: Option<&Proxy>) -> Result<Vec<ServiceInstance>> {
        Ok(Vec::new())
    }

    fn management_ports(&self, _address: &str) -> Option<Vec<Port>> {
        None
    }
}
