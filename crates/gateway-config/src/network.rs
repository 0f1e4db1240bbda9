use std::net::SocketAddr;

#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    /// Address the gateway listens on. A command line flag takes precedence,
    /// and without either the gateway picks a local default.
    pub listen_address: Option<SocketAddr>,
}
