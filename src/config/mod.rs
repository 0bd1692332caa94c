//! Service configuration loading
//!
//! Configuration comes from a YAML file named by `DONATION_REGISTRY_CONFIG`,
//! falling back to built-in defaults when the variable is unset. Nothing
//! here constructs a store; the binary wires the store in explicitly.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV_VAR: &str = "DONATION_REGISTRY_CONFIG";

/// Top-level service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Interface to bind.
    pub host: String,

    /// Port to bind.
    pub port: u16,

    /// Optional YAML fixture file to seed the in-memory store from.
    pub fixtures_path: Option<PathBuf>,

    /// Default tracing filter, overridable via `RUST_LOG`.
    pub log_filter: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
            fixtures_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from the file named by [`CONFIG_ENV_VAR`], or defaults.
    pub fn load() -> Result<Self> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_yaml_file(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8787");
        assert!(config.fixtures_path.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = ServiceConfig::from_yaml_str("port: 9000\n").unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_full_yaml() {
        let yaml = r#"
host: 0.0.0.0
port: 8080
fixtures_path: fixtures/dev.yaml
log_filter: debug
"#;
        let config = ServiceConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(
            config.fixtures_path,
            Some(PathBuf::from("fixtures/dev.yaml"))
        );
    }
}
