use async_graphql::{Object, ID};

#[derive(Debug)]
pub struct Author(track_api::Author);

impl From<track_api::Author> for Author {
    fn from(author: track_api::Author) -> Self {
        Self(author)
    }
}

#[Object]
impl Author {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn photo(&self) -> Option<&str> {
        self.0.photo.as_deref()
    }
}
