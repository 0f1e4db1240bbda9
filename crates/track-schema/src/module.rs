use async_graphql::{Object, ID};

/// A single unit of track content.
#[derive(Debug)]
pub struct Module(track_api::Module);

impl From<track_api::Module> for Module {
    fn from(module: track_api::Module) -> Self {
        Self(module)
    }
}

#[Object]
impl Module {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn title(&self) -> &str {
        &self.0.title
    }

    /// Module length, in seconds.
    async fn length(&self) -> Option<i32> {
        self.0.length
    }

    async fn content(&self) -> Option<&str> {
        self.0.content.as_deref()
    }

    async fn video_url(&self) -> Option<&str> {
        self.0.video_url.as_deref()
    }
}
