use async_graphql::{Context, Object, ID};
use track_api::TrackApi;

use crate::IncrementTrackViewsResponse;

pub struct Mutation;

#[Object]
impl Mutation {
    /// Increments a track's view counter. Unlike the queries, this always
    /// resolves to an envelope, even when the catalog call fails.
    async fn increment_track_views(&self, ctx: &Context<'_>, id: ID) -> IncrementTrackViewsResponse {
        match ctx.data_unchecked::<TrackApi>().increment_track_views(&id).await {
            Ok(track) => IncrementTrackViewsResponse::successful(track),
            Err(error) => IncrementTrackViewsResponse::upstream_failure(&error),
        }
    }
}
