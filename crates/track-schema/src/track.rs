use async_graphql::{Context, Object, Result, ID};
use track_api::TrackApi;

use crate::{Author, Module};

/// A learning track, resolved field by field off the catalog record.
#[derive(Debug)]
pub struct Track(track_api::Track);

impl From<track_api::Track> for Track {
    fn from(track: track_api::Track) -> Self {
        Self(track)
    }
}

#[Object]
impl Track {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    /// The track's author, fetched on demand through its `authorId`
    /// reference. Fires once per resolved track; any caching sits in the
    /// catalog service.
    async fn author(&self, ctx: &Context<'_>) -> Result<Author> {
        let author = ctx.data_unchecked::<TrackApi>().author(&self.0.author_id).await?;

        Ok(Author::from(author))
    }

    async fn thumbnail(&self) -> Option<&str> {
        self.0.thumbnail.as_deref()
    }

    async fn topic(&self) -> Option<&str> {
        self.0.topic.as_deref()
    }

    /// Approximate completion time, in seconds.
    async fn length(&self) -> Option<i32> {
        self.0.length
    }

    async fn modules_count(&self) -> Option<i32> {
        self.0.modules_count
    }

    async fn description(&self) -> Option<&str> {
        self.0.description.as_deref()
    }

    async fn number_of_views(&self) -> Option<i32> {
        self.0.number_of_views
    }

    /// The modules composing the track, in course order.
    async fn modules(&self, ctx: &Context<'_>) -> Result<Vec<Module>> {
        let modules = ctx.data_unchecked::<TrackApi>().track_modules(&self.0.id).await?;

        Ok(modules.into_iter().map(Module::from).collect())
    }
}
