use std::time::Duration;
use thiserror::Error;

/// Failures while fetching or parsing a YouTube channel feed.
///
/// Only `NotFound` is permanent: it means the channel was deleted or made private and
/// the poller deactivates mappings that hit it. Every other variant is transient and is
/// retried on the next cycle without touching stored state.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The feed endpoint answered 404/410 for this channel.
    #[error("Feed for channel {channel_id} was not found")]
    NotFound { channel_id: String },

    /// The feed endpoint answered with another non-success status.
    #[error("Feed for channel {channel_id} returned HTTP {status}")]
    Status { channel_id: String, status: u16 },

    /// The HTTP request itself failed (DNS, connection reset, TLS, ...).
    #[error("Failed to request feed for channel {channel_id}: {source}")]
    Request {
        channel_id: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body isn't a valid feed document.
    #[error("Failed to parse feed for channel {channel_id}: {source}")]
    Parse {
        channel_id: String,
        #[source]
        source: feed_rs::parser::ParseFeedError,
    },

    /// The fetch didn't complete within the configured timeout.
    #[error("Timed out after {after:?} fetching feed for channel {channel_id}")]
    Timeout { channel_id: String, after: Duration },
}

impl FeedError {
    /// Whether the channel is gone for good rather than temporarily unreachable.
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
