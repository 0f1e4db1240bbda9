//! TOML configuration model for the catalog gateway.
//!
//! Every section is optional; a missing or empty configuration file yields a
//! gateway that listens locally and proxies the public track catalog.

mod cors;
mod graph;
mod network;
mod upstream;

pub use cors::{AnyOrHttpMethodArray, AnyOrUrlArray, CorsConfig, HttpMethod};
pub use graph::GraphConfig;
pub use network::NetworkConfig;
pub use upstream::UpstreamConfig;

use std::fs;
use std::path::Path;

#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Listen address and related network settings.
    pub network: NetworkConfig,
    /// GraphQL endpoint settings.
    pub graph: GraphConfig,
    /// The upstream track catalog service.
    pub upstream: UpstreamConfig,
    /// Cross-origin request settings. No section means a permissive layer.
    pub cors: Option<CorsConfig>,
}

impl Config {
    /// Reads and parses the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Cannot read the configuration file
    #[error("reading configuration file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid configuration TOML
    #[error("parsing configuration: {0}")]
    Toml(#[from] toml::de::Error),
}
