//! Wire shapes of the catalog entities. The upstream service owns these
//! records; the gateway only deserializes them.

/// A learning track in the catalog.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: String,
    /// Weak reference to the track's author, resolved with a follow-up fetch.
    pub author_id: String,
    pub title: String,
    pub thumbnail: Option<String>,
    pub topic: Option<String>,
    /// Approximate completion time, in seconds.
    pub length: Option<i32>,
    pub modules_count: Option<i32>,
    pub description: Option<String>,
    pub number_of_views: Option<i32>,
    pub created_at: Option<String>,
}

/// A single unit of content, belonging to exactly one track.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    pub id: String,
    pub title: String,
    pub length: Option<i32>,
    pub content: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,
    pub name: String,
    pub photo: Option<String>,
}
