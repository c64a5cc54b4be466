//! Delivery of video notifications to Discord.
//!
//! `NotificationSink` is the seam between the poller and Discord. The Discord
//! implementation posts the rendered text together with a video embed and classifies
//! failures into `SendError`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serenity::{
    all::{ChannelId, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, CreateMessage, Timestamp},
    http::Http,
};

use crate::{
    error::dispatch::SendError,
    model::feed::{channel_url, thumbnail_url, FeedEntry},
};

/// Icon shown next to the channel name in notification embeds.
pub const YOUTUBE_FAVICON_URL: &str =
    "https://www.youtube.com/s/desktop/d743f786/img/favicon_96x96.png";

/// Maximum number of description characters shown before truncation.
pub const DESCRIPTION_LIMIT: usize = 300;

const FALLBACK_EMBED_TITLE: &str = "New video";

/// A new upload ready to be posted.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoNotification {
    /// Rendered message template.
    pub content: String,
    pub source_channel_id: String,
    pub channel_name: String,
    pub entry: FeedEntry,
    /// Embed accent color.
    pub color: u32,
    /// When the upload was detected, used when the feed has no publish time.
    pub detected_at: DateTime<Utc>,
}

/// Destination for video notifications.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Posts a notification to a Discord channel.
    ///
    /// # Arguments
    /// - `target_channel_id` - Discord channel ID as stored on the mapping
    /// - `notification` - Text and video details to post
    ///
    /// # Returns
    /// - `Ok(())` - Message was accepted by Discord
    /// - `Err(SendError)` - Invalid channel, missing access, rate limit, timeout or other
    ///   Discord failure
    async fn send(
        &self,
        target_channel_id: &str,
        notification: &VideoNotification,
    ) -> Result<(), SendError>;
}

/// Posts notifications through the bot's HTTP client.
#[derive(Clone)]
pub struct DiscordNotificationSink {
    http: Arc<Http>,
}

impl DiscordNotificationSink {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl NotificationSink for DiscordNotificationSink {
    async fn send(
        &self,
        target_channel_id: &str,
        notification: &VideoNotification,
    ) -> Result<(), SendError> {
        let channel_id = target_channel_id
            .parse::<u64>()
            .ok()
            .filter(|id| *id != 0)
            .ok_or_else(|| SendError::InvalidChannelId(target_channel_id.to_string()))?;

        let message = CreateMessage::new()
            .content(notification.content.clone())
            .embed(build_video_embed(notification));

        ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await
            .map_err(|e| SendError::from_discord(channel_id, e))?;

        Ok(())
    }
}

/// Builds the embed attached to a video notification.
///
/// Links the video title, credits the channel with the YouTube icon, shows at most
/// `DESCRIPTION_LIMIT` characters of the description and the video's max resolution
/// thumbnail.
///
/// # Arguments
/// - `notification` - Upload to describe
///
/// # Returns
/// - `CreateEmbed` - Embed ready to attach to a message
pub fn build_video_embed(notification: &VideoNotification) -> CreateEmbed {
    let entry = &notification.entry;
    let published_at = entry.published_at.unwrap_or(notification.detected_at);

    let mut embed = CreateEmbed::new()
        .color(notification.color)
        .title(entry.title.as_deref().unwrap_or(FALLBACK_EMBED_TITLE))
        .url(&entry.url)
        .author(
            CreateEmbedAuthor::new(&notification.channel_name)
                .url(channel_url(&notification.source_channel_id))
                .icon_url(YOUTUBE_FAVICON_URL),
        )
        .thumbnail(thumbnail_url(&entry.entry_id))
        .timestamp(Timestamp::from(published_at))
        .footer(CreateEmbedFooter::new(format!(
            "YouTube notification • {}",
            notification.channel_name
        )));

    if let Some(summary) = &entry.summary {
        embed = embed.description(truncate_description(summary));
    }

    embed
}

/// Cuts a description to `DESCRIPTION_LIMIT` characters, marking the cut with `...`.
fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}...", &description[..cut]),
        None => description.to_string(),
    }
}
