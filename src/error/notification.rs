use thiserror::Error;

/// User-facing failures of the notification admin commands.
///
/// Every variant is reported back to the user who ran the command; none of them are
/// retried.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NotificationError {
    /// The provided YouTube channel ID doesn't have the `UC` + 22 character shape.
    #[error("Invalid YouTube channel ID '{0}'")]
    InvalidChannelId(String),

    /// The custom message template was rejected.
    #[error("Invalid custom message: {0}")]
    InvalidTemplate(String),

    /// The YouTube channel's feed couldn't be resolved.
    #[error("YouTube channel {0} could not be found")]
    ChannelNotFound(String),

    /// No mapping exists for the YouTube channel / Discord channel pair in this guild.
    #[error("No notification for YouTube channel {source_channel_id} in channel {target_channel_id}")]
    MappingNotFound {
        source_channel_id: String,
        target_channel_id: String,
    },

    /// A mapping for the same YouTube channel / Discord channel pair already exists.
    #[error("Notification for YouTube channel {source_channel_id} already exists in channel {target_channel_id}")]
    DuplicateMapping {
        source_channel_id: String,
        target_channel_id: String,
    },
}

impl NotificationError {
    /// Message shown to the user who ran the command.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidChannelId(_) => {
                "❌ Invalid YouTube channel ID! Channel IDs start with `UC` and are 24 characters long."
                    .to_string()
            }
            Self::InvalidTemplate(reason) => format!("❌ Invalid custom message: {}", reason),
            Self::ChannelNotFound(_) => {
                "❌ Couldn't find that YouTube channel! Please check the channel ID.".to_string()
            }
            Self::MappingNotFound {
                target_channel_id, ..
            } => format!(
                "❌ No notification for that YouTube channel is set up in <#{}>.",
                target_channel_id
            ),
            Self::DuplicateMapping {
                target_channel_id, ..
            } => format!(
                "❌ Notifications for that YouTube channel are already set up in <#{}>!",
                target_channel_id
            ),
        }
    }
}
