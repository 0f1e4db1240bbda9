//! HTTP client for the upstream track catalog REST service.
//!
//! This is the datasource boundary of the gateway: one method per catalog
//! operation, each returning the decoded entity or a [`TrackApiError`].
//! Retries, caching and pagination are the catalog's concern, not ours.

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod error;
mod model;

pub use error::TrackApiError;
pub use model::{Author, Module, Track};
pub use reqwest::StatusCode;

use gateway_config::UpstreamConfig;
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

/// Client for the track catalog REST API.
///
/// Cheap to clone; all clones share the same connection pool.
#[derive(Clone)]
pub struct TrackApi {
    client: reqwest::Client,
    base_url: Url,
}

impl TrackApi {
    pub fn new(config: &UpstreamConfig) -> Result<Self, TrackApiError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.url.clone(),
        })
    }

    /// All the tracks shown on the homepage grid.
    pub async fn tracks_for_home(&self) -> Result<Vec<Track>, TrackApiError> {
        self.request(Method::GET, "tracks").await
    }

    /// A single track by id, for the track page.
    pub async fn track(&self, id: &str) -> Result<Track, TrackApiError> {
        self.request(Method::GET, &format!("track/{id}")).await
    }

    /// A single module by id, for the module detail page.
    pub async fn module(&self, id: &str) -> Result<Module, TrackApiError> {
        self.request(Method::GET, &format!("module/{id}")).await
    }

    pub async fn author(&self, id: &str) -> Result<Author, TrackApiError> {
        self.request(Method::GET, &format!("author/{id}")).await
    }

    /// The modules of a track, in course order.
    pub async fn track_modules(&self, track_id: &str) -> Result<Vec<Module>, TrackApiError> {
        self.request(Method::GET, &format!("track/{track_id}/modules")).await
    }

    /// Bumps the view counter of a track and returns the updated track.
    pub async fn increment_track_views(&self, id: &str) -> Result<Track, TrackApiError> {
        self.request(Method::PATCH, &format!("track/{id}/numberOfViews")).await
    }

    async fn request<T: DeserializeOwned>(&self, method: Method, path: &str) -> Result<T, TrackApiError> {
        let url = self.base_url.join(path)?;
        let response = self.client.request(method, url).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Keep the body verbatim; the mutation envelope surfaces it as-is.
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%status, "error response from the track catalog");
            return Err(TrackApiError::Upstream { status, body });
        }

        Ok(response.json().await?)
    }
}
