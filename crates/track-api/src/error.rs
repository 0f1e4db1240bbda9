use reqwest::StatusCode;

/// Failure talking to the track catalog service.
#[derive(Debug, thiserror::Error)]
pub enum TrackApiError {
    /// The catalog answered, but with a non-success status.
    #[error("the track catalog responded with HTTP {status}: {body}")]
    Upstream { status: StatusCode, body: String },
    /// No usable response: connect failures, timeouts, or a body that does
    /// not decode into the expected shape.
    #[error("request to the track catalog failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The id could not be joined onto the catalog base URL.
    #[error("invalid track catalog URL: {0}")]
    Url(#[from] url::ParseError),
}

impl TrackApiError {
    /// Status code and body text of the upstream response, when one was
    /// received at all.
    pub fn response_parts(&self) -> Option<(StatusCode, &str)> {
        match self {
            TrackApiError::Upstream { status, body } => Some((*status, body)),
            _ => None,
        }
    }
}
