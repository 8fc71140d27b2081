use anyhow::Result;
use registry_catalog::{CatalogServiceDiscovery, StaticCatalog};
use registry_core::{Labels, ServiceDiscovery};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting service-discovery daemon...");

    let config = Config::from_env()?;
    info!("Catalog snapshot: {}", config.snapshot_path.display());
    info!("Service port: {}", config.service_port);

    let catalog = StaticCatalog::from_path(&config.snapshot_path).await?;
    let registry: Arc<dyn ServiceDiscovery> =
        Arc::new(CatalogServiceDiscovery::new(catalog, config.service_port));

    let mut ticker = tokio::time::interval(config.poll_interval);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match discover_services(registry.as_ref()).await {
                    Ok(count) => {
                        info!("Discovered {} service instances", count);
                    }
                    Err(e) => {
                        error!("Error discovering services: {}", e);
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown signal received, exiting...");
                return Ok(());
            }
        }
    }
}

async fn discover_services(registry: &dyn ServiceDiscovery) -> Result<usize> {
    let services = registry.services().await?;
    debug!("Found {} services", services.len());

    // A hostname listed by both route sources appears twice, but one lookup
    // already returns the backends of both.
    let hostnames: BTreeSet<&str> = services.iter().map(|s| s.hostname.as_str()).collect();

    let labels = Labels::new();
    let mut count = 0;
    for hostname in hostnames {
        let instances = registry.instances_by_port(hostname, &[], &labels).await?;
        debug!("Service {} has {} instances", hostname, instances.len());
        count += instances.len();
    }

    Ok(count)
}
