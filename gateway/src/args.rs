use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// The GraphQL gateway for the track catalog
#[derive(Debug, Parser)]
#[command(name = "catalog-gateway", version)]
pub struct Args {
    /// Path to the TOML configuration file
    #[arg(long, short, env = "CATALOG_GATEWAY_CONFIG")]
    pub config: Option<PathBuf>,
    /// Address to listen on, overriding the configuration file
    #[arg(long)]
    pub listen_address: Option<SocketAddr>,
    /// Log filter directives, in `tracing_subscriber::EnvFilter` syntax
    #[arg(long, env = "CATALOG_GATEWAY_LOG", default_value = "info")]
    pub log_filter: String,
}
