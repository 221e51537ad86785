//! Server configuration.

use crate::ServerError;
use folio_core::FolioConfig;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Data file, activity limit and summary placeholders
    #[serde(default)]
    pub portfolio: FolioConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            portfolio: FolioConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ServerError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply a port override, as read from the `PORT` environment variable.
    pub fn with_port_override(mut self, port: Option<&str>) -> Result<Self, ServerError> {
        if let Some(raw) = port {
            self.port = raw
                .trim()
                .parse()
                .map_err(|_| ServerError::InvalidPort(raw.to_string()))?;
        }
        Ok(self)
    }

    /// Address the server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .map_err(|_| ServerError::InvalidHost(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
