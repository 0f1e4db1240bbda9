//! GraphQL schema of the catalog gateway.
//!
//! Resolvers are deliberately thin: each one forwards to the [`TrackApi`]
//! datasource carried in the schema context and hands the result back
//! unmodified. The one exception is the `incrementTrackViews` mutation,
//! which never fails but instead folds both outcomes into
//! [`IncrementTrackViewsResponse`].

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod author;
mod module;
mod mutation;
mod query;
mod response;
mod track;

pub use author::Author;
pub use module::Module;
pub use mutation::Mutation;
pub use query::Query;
pub use response::IncrementTrackViewsResponse;
pub use track::Track;

use async_graphql::{EmptySubscription, Schema};
use track_api::TrackApi;

/// The executable schema, with the datasource client in its context data.
pub type CatalogSchema = Schema<Query, Mutation, EmptySubscription>;

pub fn build_schema(track_api: TrackApi) -> CatalogSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(track_api)
        .finish()
}
