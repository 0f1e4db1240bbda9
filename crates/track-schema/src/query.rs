use async_graphql::{Context, Object, Result, ID};
use track_api::TrackApi;

use crate::{Module, Track};

pub struct Query;

#[Object]
impl Query {
    /// The tracks shown on the homepage grid.
    async fn tracks_for_home(&self, ctx: &Context<'_>) -> Result<Vec<Track>> {
        let tracks = ctx.data_unchecked::<TrackApi>().tracks_for_home().await?;

        Ok(tracks.into_iter().map(Track::from).collect())
    }

    /// A single track by id, for the track page.
    async fn track(&self, ctx: &Context<'_>, id: ID) -> Result<Track> {
        let track = ctx.data_unchecked::<TrackApi>().track(&id).await?;

        Ok(Track::from(track))
    }

    /// A single module by id, for the module detail page.
    async fn module(&self, ctx: &Context<'_>, id: ID) -> Result<Module> {
        let module = ctx.data_unchecked::<TrackApi>().module(&id).await?;

        Ok(Module::from(module))
    }
}
