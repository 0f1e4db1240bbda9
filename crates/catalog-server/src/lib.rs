//! HTTP serving layer of the catalog gateway.
//!
//! Builds the axum router around the GraphQL schema, reformats outgoing
//! GraphQL errors into the gateway's flat error shape, and keeps the process
//! alive until a shutdown signal arrives.

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod error;
mod server;

pub use error::Error;
pub use server::{serve, ServeConfig};

pub(crate) type Result<T> = std::result::Result<T, Error>;
