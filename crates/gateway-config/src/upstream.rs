use std::time::Duration;

use duration_str::deserialize_duration;
use url::Url;

const DEFAULT_UPSTREAM_URL: &str = "https://odyssey-lift-off-rest-api.herokuapp.com/";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpstreamConfig {
    /// Base URL of the track catalog REST service.
    pub url: Url,
    /// Timeout applied to every request against the catalog.
    #[serde(deserialize_with = "deserialize_duration")]
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_UPSTREAM_URL).expect("default upstream URL must parse"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}
