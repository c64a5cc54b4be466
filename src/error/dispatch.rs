use std::time::Duration;
use thiserror::Error;

/// Failures while delivering a notification message to Discord.
///
/// The poller never advances a mapping's last seen entry when a send fails, so every
/// variant results in the same video being retried on the next cycle.
#[derive(Error, Debug)]
pub enum SendError {
    /// The stored target channel ID isn't a valid snowflake.
    #[error("Invalid target channel ID '{0}'")]
    InvalidChannelId(String),

    /// Discord reports the channel doesn't exist (deleted or never visible to the bot).
    #[error("Target channel {channel_id} was not found")]
    ChannelNotFound { channel_id: u64 },

    /// The bot lacks Send Messages / Embed Links in the channel.
    #[error("Missing permission to post in channel {channel_id}")]
    PermissionDenied { channel_id: u64 },

    /// Discord rate limited the request.
    #[error("Rate limited while posting to channel {channel_id}")]
    RateLimited { channel_id: u64 },

    /// The send didn't complete within the configured timeout.
    #[error("Timed out after {after:?} posting to channel {channel_id}")]
    Timeout { channel_id: String, after: Duration },

    /// Any other Discord API error.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),
}

impl SendError {
    /// Classifies a Serenity error raised while posting to `channel_id`.
    pub fn from_discord(channel_id: u64, err: serenity::Error) -> Self {
        use serenity::http::HttpError;

        if let serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) = &err {
            match response.status_code.as_u16() {
                404 => return Self::ChannelNotFound { channel_id },
                403 => return Self::PermissionDenied { channel_id },
                429 => return Self::RateLimited { channel_id },
                _ => {}
            }
        }

        Self::Discord(Box::new(err))
    }
}
