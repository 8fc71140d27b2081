//! Service discovery contract consumed by the mesh control plane

use crate::{Labels, Port, Proxy, Result, Service, ServiceInstance};

/// Uniform catalog view a control plane pulls from any registry backend
///
/// "Nothing found" is an empty or absent result; `Err` means the call failed.
#[async_trait::async_trait]
pub trait ServiceDiscovery: Send + Sync {
    /// List every service in the registry
    async fn services(&self) -> Result<Vec<Service>>;

    /// First service whose hostname matches exactly
    async fn get_service(&self, hostname: &str) -> Result<Option<Service>>;

    /// Instances of a service filtered by port names and labels
    async fn instances(
        &self,
        hostname: &str,
        ports: &[String],
        labels: &Labels,
    ) -> Result<Vec<ServiceInstance>>;

    /// Instances of a service filtered by port numbers and labels
    async fn instances_by_port(
        &self,
        hostname: &str,
        ports: &[u16],
        labels: &Labels,
    ) -> Result<Vec<ServiceInstance>>;

    /// Instances co-located with a sidecar proxy
    async fn proxy_service_instances(&self, proxy: Option<&Proxy>) -> Result<Vec<ServiceInstance>>;

    /// Management ports exposed by a workload address
    fn management_ports(&self, address: &str) -> Option<Vec<Port>>;
}
