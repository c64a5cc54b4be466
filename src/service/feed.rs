//! YouTube channel feed client.
//!
//! Fetches the public Atom uploads feed of a channel and converts it into a `ChannelFeed`.
//! The `FeedSource` trait is the seam the poller and the notification service depend on,
//! so both can run against a fake feed in tests.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::{
    error::feed::FeedError,
    model::feed::{video_url, ChannelFeed, FeedEntry, FEED_BASE_URL},
};

/// Anything that can resolve a YouTube channel ID to its current uploads.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetches the uploads feed of a channel.
    ///
    /// # Arguments
    /// - `source_channel_id` - YouTube channel ID (`UC...`)
    ///
    /// # Returns
    /// - `Ok(ChannelFeed)` - Channel title and uploads, newest first
    /// - `Err(FeedError::NotFound)` - Channel deleted or private
    /// - `Err(FeedError)` - Transient network, status, parse or timeout failure
    async fn fetch_channel(&self, source_channel_id: &str) -> Result<ChannelFeed, FeedError>;
}

/// `FeedSource` backed by the public YouTube feed endpoint.
#[derive(Clone)]
pub struct YoutubeFeedClient {
    http: reqwest::Client,
    timeout: Duration,
}

impl YoutubeFeedClient {
    /// Creates a feed client using the public YouTube endpoint.
    ///
    /// # Arguments
    /// - `http` - Shared HTTP client
    /// - `timeout` - Upper bound for a single request, including reading the body
    pub fn new(http: reqwest::Client, timeout: Duration) -> Self {
        Self { http, timeout }
    }

    fn request_error(&self, channel_id: &str, source: reqwest::Error) -> FeedError {
        if source.is_timeout() {
            FeedError::Timeout {
                channel_id: channel_id.to_string(),
                after: self.timeout,
            }
        } else {
            FeedError::Request {
                channel_id: channel_id.to_string(),
                source,
            }
        }
    }
}

#[async_trait]
impl FeedSource for YoutubeFeedClient {
    async fn fetch_channel(&self, source_channel_id: &str) -> Result<ChannelFeed, FeedError> {
        let response = self
            .http
            .get(FEED_BASE_URL)
            .query(&[("channel_id", source_channel_id)])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.request_error(source_channel_id, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            return Err(FeedError::NotFound {
                channel_id: source_channel_id.to_string(),
            });
        }
        if !status.is_success() {
            return Err(FeedError::Status {
                channel_id: source_channel_id.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.request_error(source_channel_id, e))?;

        parse_channel_feed(&body, source_channel_id)
    }
}

/// Parses a YouTube Atom uploads feed.
///
/// Entries keep document order, which YouTube serves newest first.
///
/// # Arguments
/// - `body` - Raw feed document
/// - `source_channel_id` - Channel the feed belongs to, for error context
///
/// # Returns
/// - `Ok(ChannelFeed)` - Parsed feed
/// - `Err(FeedError::Parse)` - Body isn't a valid feed
pub fn parse_channel_feed(body: &[u8], source_channel_id: &str) -> Result<ChannelFeed, FeedError> {
    let feed = feed_rs::parser::parse(body).map_err(|source| FeedError::Parse {
        channel_id: source_channel_id.to_string(),
        source,
    })?;

    let channel_name = feed
        .title
        .map(|title| title.content.trim().to_string())
        .filter(|title| !title.is_empty());

    let entries = feed
        .entries
        .into_iter()
        .map(|entry| {
            let entry_id = video_id(&entry.id).to_string();

            // Atom <summary> is rarely present; YouTube puts the description in media:group.
            let summary = entry
                .media
                .iter()
                .find_map(|media| media.description.as_ref())
                .map(|description| description.content.clone())
                .or_else(|| entry.summary.map(|summary| summary.content))
                .filter(|summary| !summary.trim().is_empty());

            FeedEntry {
                url: video_url(&entry_id),
                entry_id,
                title: entry.title.map(|title| title.content),
                published_at: entry.published.or(entry.updated),
                summary,
            }
        })
        .collect();

    Ok(ChannelFeed {
        channel_name,
        entries,
    })
}

/// Extracts the video ID from an Atom entry ID of the form `yt:video:<id>`.
fn video_id(entry_id: &str) -> &str {
    entry_id
        .split(':')
        .nth(2)
        .filter(|id| !id.is_empty())
        .unwrap_or(entry_id)
}
