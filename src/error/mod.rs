//! Error types and user-facing error messages.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves as
//! the top-level error type that wraps domain-specific errors; `AppError::user_message`
//! maps any error to the text a Discord user sees when a command fails.

pub mod config;
pub mod dispatch;
pub mod feed;
pub mod notification;

use thiserror::Error;

use crate::error::{
    config::ConfigError, dispatch::SendError, feed::FeedError, notification::NotificationError,
};

/// Generic reply for failures that shouldn't leak details to users.
const GENERIC_USER_MESSAGE: &str = "❌ Something went wrong, please try again later.";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Validation, lookup or uniqueness failure of a notification admin command.
    ///
    /// Reported to the user verbatim via `NotificationError::user_message`.
    #[error(transparent)]
    NotificationErr(#[from] NotificationError),

    /// Feed fetch or parse failure.
    #[error(transparent)]
    FeedErr(#[from] FeedError),

    /// Notification delivery failure.
    #[error(transparent)]
    SendErr(#[from] SendError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// HTTP client couldn't be constructed.
    #[error(transparent)]
    HttpClientErr(#[from] reqwest::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Request was malformed in a way the command layer should have prevented.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Maps the error to the message shown to the Discord user who triggered it.
    ///
    /// Domain errors produce specific guidance; infrastructure errors are logged here and
    /// replaced with a generic message to avoid leaking internals.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotificationErr(err) => err.user_message(),
            Self::BadRequest(msg) => format!("❌ {}", msg),
            Self::FeedErr(err) if err.is_permanent() => {
                NotificationError::ChannelNotFound(String::new()).user_message()
            }
            Self::FeedErr(err) => {
                tracing::warn!("Feed error while handling command: {}", err);
                "❌ Couldn't reach YouTube right now, please try again later.".to_string()
            }
            err => {
                tracing::error!("{}", err);
                GENERIC_USER_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_errors_are_shown_verbatim() {
        let err = AppError::from(NotificationError::DuplicateMapping {
            source_channel_id: "UCxxxxxxxxxxxxxxxxxxxxxx".to_string(),
            target_channel_id: "42".to_string(),
        });

        assert!(err.user_message().contains("<#42>"));
    }

    #[test]
    fn bad_request_message_is_shown() {
        let err = AppError::BadRequest("This command can only be used in a server".to_string());

        assert_eq!(
            err.user_message(),
            "❌ This command can only be used in a server"
        );
    }

    #[test]
    fn infrastructure_errors_are_generic() {
        let err = AppError::from(sea_orm::DbErr::Custom("disk on fire".to_string()));

        let message = err.user_message();
        assert_eq!(message, GENERIC_USER_MESSAGE);
        assert!(!message.contains("disk"));
    }
}
