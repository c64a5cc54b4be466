//! Models for fetched YouTube channel feeds.

use chrono::{DateTime, Utc};

/// Base URL of a channel's uploads feed.
pub const FEED_BASE_URL: &str = "https://www.youtube.com/feeds/videos.xml";

/// A channel feed as returned by the feed source.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelFeed {
    /// Channel title from the feed, if present.
    pub channel_name: Option<String>,
    /// Uploads, newest first.
    pub entries: Vec<FeedEntry>,
}

impl ChannelFeed {
    /// The most recent upload.
    pub fn latest(&self) -> Option<&FeedEntry> {
        self.entries.first()
    }
}

/// A single upload within a channel feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    /// YouTube video ID.
    pub entry_id: String,
    pub title: Option<String>,
    /// Watch URL of the video.
    pub url: String,
    pub published_at: Option<DateTime<Utc>>,
    /// Video description.
    pub summary: Option<String>,
}

/// Watch URL for a video ID.
pub fn video_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Public URL of a YouTube channel.
pub fn channel_url(channel_id: &str) -> String {
    format!("https://youtube.com/channel/{}", channel_id)
}

/// Highest resolution thumbnail URL for a video ID.
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{}/maxresdefault.jpg", video_id)
}
