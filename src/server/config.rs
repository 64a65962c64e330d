// src/server/config.rs

//! Configuration file parsing for the pantry server
//!
//! Supports TOML configuration files with the following sections:
//! - [server] - Bind address
//! - [catalog] - Catalog file path

use crate::server::ServerConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
pub struct PantryConfig {
    /// Server settings
    #[serde(default)]
    pub server: ServerSection,

    /// Catalog settings
    #[serde(default)]
    pub catalog: CatalogSection,
}

/// Server configuration section
#[derive(Debug, Deserialize)]
pub struct ServerSection {
    /// Bind address
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8080".to_string()
}

/// Catalog configuration section
#[derive(Debug, Default, Deserialize)]
pub struct CatalogSection {
    /// Path to a TOML catalog file (builtin catalog when absent)
    pub path: Option<PathBuf>,
}

impl PantryConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: PantryConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.server
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))?;
        Ok(())
    }

    /// Convert into the runtime server configuration
    pub fn into_server_config(self) -> Result<ServerConfig> {
        let bind_addr = self
            .server
            .bind
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid server.bind address: {}", self.server.bind))?;

        Ok(ServerConfig {
            bind_addr,
            catalog_path: self.catalog.path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PantryConfig::default();
        assert_eq!(config.server.bind, "127.0.0.1:8080");
        assert!(config.catalog.path.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_sections() {
        let config: PantryConfig = toml::from_str(
            r#"
            [server]
            bind = "0.0.0.0:9000"

            [catalog]
            path = "/etc/pantry/catalog.toml"
            "#,
        )
        .unwrap();

        let server = config.into_server_config().unwrap();
        assert_eq!(server.bind_addr, "0.0.0.0:9000".parse().unwrap());
        assert_eq!(
            server.catalog_path,
            Some(PathBuf::from("/etc/pantry/catalog.toml"))
        );
    }

    #[test]
    fn test_invalid_bind_rejected() {
        let config: PantryConfig = toml::from_str("[server]\nbind = \"not-an-addr\"").unwrap();
        assert!(config.validate().is_err());
    }
}
