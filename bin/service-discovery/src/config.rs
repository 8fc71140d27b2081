//! Daemon configuration from environment variables

use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use std::time::Duration;

pub const SERVICE_PORT_VAR: &str = "CATALOG_SERVICE_PORT";
pub const SNAPSHOT_PATH_VAR: &str = "CATALOG_SNAPSHOT_PATH";
pub const POLL_INTERVAL_VAR: &str = "CATALOG_POLL_INTERVAL_SECS";

/// Port every platform app listens on unless configured otherwise
pub const DEFAULT_SERVICE_PORT: u16 = 8080;
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub service_port: u16,
    pub snapshot_path: PathBuf,
    pub poll_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let service_port = match lookup(SERVICE_PORT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .with_context(|| format!("invalid {}: {:?}", SERVICE_PORT_VAR, value))?,
            None => DEFAULT_SERVICE_PORT,
        };

        let snapshot_path = lookup(SNAPSHOT_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| anyhow!("{} must be set", SNAPSHOT_PATH_VAR))?;

        let poll_interval = match lookup(POLL_INTERVAL_VAR) {
            Some(value) => {
                let secs = value
                    .trim()
                    .parse::<u64>()
                    .with_context(|| format!("invalid {}: {:?}", POLL_INTERVAL_VAR, value))?;
                if secs == 0 {
                    return Err(anyhow!("{} must be greater than zero", POLL_INTERVAL_VAR));
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_POLL_INTERVAL,
        };

        Ok(Self {
            service_port,
            snapshot_path,
            poll_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[(SNAPSHOT_PATH_VAR, "/etc/catalog.yaml")]))
            .expect("valid config");
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.snapshot_path, PathBuf::from("/etc/catalog.yaml"));
        assert_eq!(config.poll_interval, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            (SNAPSHOT_PATH_VAR, "/tmp/catalog.yaml"),
            (SERVICE_PORT_VAR, "9090"),
            (POLL_INTERVAL_VAR, "5"),
        ]))
        .expect("valid config");
        assert_eq!(config.service_port, 9090);
        assert_eq!(config.poll_interval, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_snapshot_path() {
        let err = Config::from_lookup(lookup(&[])).expect_err("snapshot path required");
        assert!(err.to_string().contains(SNAPSHOT_PATH_VAR));
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup(&[
            (SNAPSHOT_PATH_VAR, "/etc/catalog.yaml"),
            (SERVICE_PORT_VAR, "70000"),
        ]))
        .expect_err("port out of range");
        assert!(err.to_string().contains(SERVICE_PORT_VAR));
    }

    #[test]
    fn test_zero_poll_interval() {
        let err = Config::from_lookup(lookup(&[
            (SNAPSHOT_PATH_VAR, "/etc/catalog.yaml"),
            (POLL_INTERVAL_VAR, "0"),
        ]))
        .expect_err("zero interval");
        assert!(err.to_string().contains(POLL_INTERVAL_VAR));
    }
}
