//! Mesh-facing service model
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Transport protocol advertised on a service port
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Http,
    Tcp,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Tcp => "tcp",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port descriptor: number, protocol and symbolic name
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Port {
    pub port: u16,
    pub protocol: Protocol,
    pub name: String,
}

impl Port {
    /// HTTP-named port, used for public routes
    pub fn http(port: u16) -> Self {
        Self {
            port,
            protocol: Protocol::Http,
            name: Protocol::Http.as_str().to_string(),
        }
    }

    /// TCP-named port, used for internal routes
    pub fn tcp(port: u16) -> Self {
        Self {
            port,
            protocol: Protocol::Tcp,
            name: Protocol::Tcp.as_str().to_string(),
        }
    }
}

/// How the mesh resolves a service to its endpoints
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    /// The caller is handed every instance and balances among them
    #[default]
    ClientSideLb,
}

/// Which catalog query a service was projected from
///
/// A hostname present in both sources yields one service per source; the two
/// are never merged. Lookups by hostname return whichever is scanned first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteSource {
    Public,
    Internal,
}

/// A discoverable hostname as seen by the mesh
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub hostname: String,

    /// Internal virtual address, set for internal routes only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// The platform exposes a single port per app
    pub port: Port,

    /// Reachable from outside the mesh (always false here)
    pub mesh_external: bool,

    pub resolution: Resolution,

    pub source: RouteSource,
}

impl Service {
    /// Service for a public route: HTTP port, no address
    pub fn public(hostname: impl Into<String>, port: Port) -> Self {
        Self {
            hostname: hostname.into(),
            address: None,
            port,
            mesh_external: false,
            resolution: Resolution::ClientSideLb,
            source: RouteSource::Public,
        }
    }

    /// Service for an internal route, addressed by its VIP
    pub fn internal(hostname: impl Into<String>, vip: impl Into<String>, port: Port) -> Self {
        Self {
            hostname: hostname.into(),
            address: Some(vip.into()),
            port,
            mesh_external: false,
            resolution: Resolution::ClientSideLb,
            source: RouteSource::Internal,
        }
    }

    /// Port list view for callers expecting several ports
    pub fn ports(&self) -> &[Port] {
        std::slice::from_ref(&self.port)
    }
}

/// A concrete endpoint and the service port it answers on
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkEndpoint {
    pub address: String,
    pub port: u16,
    pub service_port: Port,
}

/// One backend of a service
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInstance {
    pub endpoint: NetworkEndpoint,
    pub service: Service,
}

/// Sidecar proxy identity as presented by the control plane
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proxy {
    pub id: String,
    pub ip_address: String,
    pub domain: String,
}

/// Label selectors; any set matching selects an instance
pub type Labels = Vec<BTreeMap<String, String>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_flavors() {
        let http = Port::http(8080);
        assert_eq!(http.port, 8080);
        assert_eq!(http.protocol, Protocol::Http);
        assert_eq!(http.name, "http");

        let tcp = Port::tcp(8080);
        assert_eq!(tcp.port, 8080);
        assert_eq!(tcp.protocol, Protocol::Tcp);
        assert_eq!(tcp.name, "tcp");
    }

    #[test]
    fn test_public_service() {
        let svc = Service::public("a.apps.internal", Port::http(8080));
        assert_eq!(svc.address, None);
        assert!(!svc.mesh_external);
        assert_eq!(svc.resolution, Resolution::ClientSideLb);
        assert_eq!(svc.source, RouteSource::Public);
        assert_eq!(svc.ports(), &[Port::http(8080)]);
    }

    #[test]
    fn test_internal_service() {
        let svc = Service::internal("b.internal", "10.255.0.5", Port::tcp(8080));
        assert_eq!(svc.address.as_deref(), Some("10.255.0.5"));
        assert!(!svc.mesh_external);
        assert_eq!(svc.source, RouteSource::Internal);
        assert_eq!(svc.ports().len(), 1);
    }

    #[test]
    fn test_service_serialization() {
        let svc = Service::public("a.apps.internal", Port::http(8080));
        let json = serde_json::to_value(&svc).expect("serializable service");
        assert_eq!(json["port"]["protocol"], "http");
        assert_eq!(json["source"], "public");
        assert!(json.get("address").is_none());
    }
}
