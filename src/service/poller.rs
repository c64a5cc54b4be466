//! Feed polling cycle and stale mapping cleanup.
//!
//! One cycle walks every active mapping sequentially: fetch the channel feed, compare the
//! top upload against the stored last seen entry, and post a notification when it differs.
//! The last seen entry only advances after a successful send, so failed sends are retried
//! on the next cycle. Each mapping is handled independently; one failure never stops the
//! rest of the cycle.

use chrono::Duration;
use sea_orm::DatabaseConnection;
use tokio::time::timeout;

use crate::{
    config::NotifierSettings,
    data::notification::NotificationMappingRepository,
    error::{dispatch::SendError, feed::FeedError, AppError},
    model::{
        feed::{channel_url, FeedEntry},
        notification::{MappingFilter, NotificationMapping, UpdateNotificationMappingParam},
    },
    service::{
        clock::Clock,
        dispatch::{NotificationSink, VideoNotification},
        feed::FeedSource,
        template::{render, TemplateVars},
    },
};

/// Inactive mappings untouched for this many days are purged by the cleanup job.
pub const RETENTION_DAYS: i64 = 7;

const UNKNOWN_TITLE: &str = "Unknown title";

/// Result of checking a single mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingOutcome {
    /// The channel is gone; the mapping was deactivated.
    Deactivated,
    /// The feed couldn't be fetched this cycle.
    FetchFailed,
    /// The feed has no uploads.
    Empty,
    /// The top upload was already notified.
    Unchanged,
    /// A new upload was posted and recorded.
    Notified,
    /// A new upload was found but posting it failed.
    SendFailed,
}

/// Tally of one polling cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Active mappings processed.
    pub checked: usize,
    pub notified: usize,
    pub unchanged: usize,
    pub empty: usize,
    pub deactivated: usize,
    /// Fetch, send and store failures.
    pub failed: usize,
}

impl CycleReport {
    fn record(&mut self, outcome: MappingOutcome) {
        match outcome {
            MappingOutcome::Deactivated => self.deactivated += 1,
            MappingOutcome::Empty => self.empty += 1,
            MappingOutcome::Unchanged => self.unchanged += 1,
            MappingOutcome::Notified => self.notified += 1,
            MappingOutcome::FetchFailed | MappingOutcome::SendFailed => self.failed += 1,
        }
    }
}

pub struct FeedPoller<'a> {
    db: &'a DatabaseConnection,
    feed: &'a dyn FeedSource,
    sink: &'a dyn NotificationSink,
    clock: &'a dyn Clock,
    settings: &'a NotifierSettings,
}

impl<'a> FeedPoller<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        feed: &'a dyn FeedSource,
        sink: &'a dyn NotificationSink,
        clock: &'a dyn Clock,
        settings: &'a NotifierSettings,
    ) -> Self {
        Self {
            db,
            feed,
            sink,
            clock,
            settings,
        }
    }

    /// Checks every active mapping once.
    ///
    /// # Returns
    /// - `Ok(CycleReport)` - Outcome counts; per-mapping failures are counted, not returned
    /// - `Err(AppError::DbErr)` - Active mappings couldn't be loaded
    pub async fn run_cycle(&self) -> Result<CycleReport, AppError> {
        let repo = NotificationMappingRepository::new(self.db);
        let mappings = repo.find(&MappingFilter::active()).await?;

        let mut report = CycleReport {
            checked: mappings.len(),
            ..Default::default()
        };

        for mapping in &mappings {
            match self.check_mapping(mapping).await {
                Ok(outcome) => report.record(outcome),
                Err(e) => {
                    tracing::error!(
                        "Failed to process notification {} for YouTube channel {}: {}",
                        mapping.id,
                        mapping.source_channel_id,
                        e
                    );
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }

    /// Deletes inactive mappings last updated before the retention window.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of mappings deleted
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn cleanup_inactive(&self) -> Result<u64, AppError> {
        let cutoff = self.clock.now() - Duration::days(RETENTION_DAYS);

        let repo = NotificationMappingRepository::new(self.db);
        let deleted = repo
            .delete_many(&MappingFilter::inactive_before(cutoff))
            .await?;

        Ok(deleted)
    }

    async fn check_mapping(
        &self,
        mapping: &NotificationMapping,
    ) -> Result<MappingOutcome, AppError> {
        let repo = NotificationMappingRepository::new(self.db);
        let request_timeout = self.settings.request_timeout;

        let fetched = timeout(
            request_timeout,
            self.feed.fetch_channel(&mapping.source_channel_id),
        )
        .await
        .unwrap_or_else(|_| {
            Err(FeedError::Timeout {
                channel_id: mapping.source_channel_id.clone(),
                after: request_timeout,
            })
        });

        let feed = match fetched {
            Ok(feed) => feed,
            Err(err) if err.is_permanent() => {
                tracing::warn!(
                    "Deactivating notification {} for {}: {}",
                    mapping.id,
                    mapping.source_channel_name,
                    err
                );
                let now = self.clock.now();
                repo.update_by_id(
                    mapping.id,
                    UpdateNotificationMappingParam {
                        is_active: Some(false),
                        last_checked_at: Some(now),
                        ..UpdateNotificationMappingParam::at(now)
                    },
                )
                .await?;
                return Ok(MappingOutcome::Deactivated);
            }
            Err(err) => {
                tracing::warn!("Skipping notification {} this cycle: {}", mapping.id, err);
                return Ok(MappingOutcome::FetchFailed);
            }
        };

        let Some(latest) = feed.latest() else {
            tracing::debug!("No uploads in feed of {}", mapping.source_channel_name);
            return Ok(MappingOutcome::Empty);
        };

        if mapping.last_seen_entry_id.as_deref() == Some(latest.entry_id.as_str()) {
            tracing::debug!("No new video for {}", mapping.source_channel_name);
            return Ok(MappingOutcome::Unchanged);
        }

        let notification = self.build_notification(mapping, latest);

        let sent = timeout(
            request_timeout,
            self.sink.send(&mapping.target_channel_id, &notification),
        )
        .await
        .unwrap_or_else(|_| {
            Err(SendError::Timeout {
                channel_id: mapping.target_channel_id.clone(),
                after: request_timeout,
            })
        });

        if let Err(err) = sent {
            tracing::error!(
                "Failed to post video {} of {} to channel {}: {}",
                latest.entry_id,
                mapping.source_channel_name,
                mapping.target_channel_id,
                err
            );
            return Ok(MappingOutcome::SendFailed);
        }

        let now = self.clock.now();
        repo.update_by_id(
            mapping.id,
            UpdateNotificationMappingParam {
                last_seen_entry_id: Some(latest.entry_id.clone()),
                last_checked_at: Some(now),
                ..UpdateNotificationMappingParam::at(now)
            },
        )
        .await?;

        tracing::info!(
            "Posted video {} of {} to channel {}",
            latest.entry_id,
            mapping.source_channel_name,
            mapping.target_channel_id
        );

        Ok(MappingOutcome::Notified)
    }

    fn build_notification(
        &self,
        mapping: &NotificationMapping,
        latest: &FeedEntry,
    ) -> VideoNotification {
        let template = mapping
            .custom_template
            .as_deref()
            .unwrap_or(&self.settings.default_template);
        let channel_url = channel_url(&mapping.source_channel_id);

        let content = render(
            template,
            &TemplateVars {
                video_title: latest.title.as_deref().unwrap_or(UNKNOWN_TITLE),
                video_url: &latest.url,
                channel_name: &mapping.source_channel_name,
                channel_url: &channel_url,
            },
        );

        VideoNotification {
            content,
            source_channel_id: mapping.source_channel_id.clone(),
            channel_name: mapping.source_channel_name.clone(),
            entry: latest.clone(),
            color: self.settings.embed_color,
            detected_at: self.clock.now(),
        }
    }
}
