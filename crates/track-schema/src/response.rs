use async_graphql::SimpleObject;
use track_api::TrackApiError;

use crate::Track;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Uniform envelope returned by the `incrementTrackViews` mutation.
///
/// `code`, `success` and `message` sit at the same level as the `track`
/// payload, so callers always receive one flat, well-formed object whether
/// the upstream call worked or not.
#[derive(Debug, SimpleObject)]
pub struct IncrementTrackViewsResponse {
    /// HTTP-style status of the attempted increment.
    pub code: i32,
    pub success: bool,
    /// Human-readable outcome, never empty.
    pub message: String,
    /// The updated track on success, `null` on failure.
    pub track: Option<Track>,
}

impl IncrementTrackViewsResponse {
    /// Envelope for a successful increment. The message quotes the id of the
    /// track the catalog returned, not the id the caller asked for.
    pub fn successful(track: track_api::Track) -> Self {
        Self {
            code: 200,
            success: true,
            message: format!("Successfully incremented number of views for track {}", track.id),
            track: Some(Track::from(track)),
        }
    }

    /// Envelope for a failed increment. Status and body of the upstream
    /// response carry over when one was received; without one the envelope
    /// falls back to a plain 500. An empty body also falls back to the
    /// generic message.
    pub fn upstream_failure(error: &TrackApiError) -> Self {
        let parts = error.response_parts();

        let code = parts.map(|(status, _)| i32::from(status.as_u16())).unwrap_or(500);
        let message = match parts {
            Some((_, body)) if !body.is_empty() => body.to_owned(),
            _ => UNKNOWN_ERROR.to_owned(),
        };

        Self {
            code,
            success: false,
            message,
            track: None,
        }
    }
}
