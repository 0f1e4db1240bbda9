use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::{crate_version, Parser};
use tokio::runtime;

use catalog_server::ServeConfig;

mod args;
mod config;
mod telemetry;

const THREAD_NAME: &str = "catalog-gateway";

const DEFAULT_LISTEN_ADDRESS: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 4000);

fn main() -> anyhow::Result<()> {
    let args = args::Args::parse();
    let config = config::load(&args)?;

    let runtime = runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name(THREAD_NAME)
        .build()?;

    runtime.block_on(async move {
        telemetry::init(&args)?;

        tracing::info!("Catalog Gateway {}", crate_version!());

        let listen_address = args
            .listen_address
            .or(config.network.listen_address)
            .unwrap_or(DEFAULT_LISTEN_ADDRESS);

        catalog_server::serve(ServeConfig { listen_address, config })
            .await
            .map_err(anyhow::Error::from)
    })
}
