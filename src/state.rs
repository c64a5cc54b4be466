//! Application state shared by the scheduled jobs.
//!
//! The state is built once in `main` after the Discord client exists and then cloned into
//! every job. All fields are cheap to clone: `DatabaseConnection` is a pool handle and the
//! collaborators are reference counted.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::NotifierSettings,
    service::{
        clock::Clock, dispatch::NotificationSink, feed::FeedSource, poller::FeedPoller,
    },
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for notification mappings.
    pub db: DatabaseConnection,

    /// Source of YouTube channel feeds.
    pub feed: Arc<dyn FeedSource>,

    /// Destination for video notifications.
    pub sink: Arc<dyn NotificationSink>,

    /// Time source for check timestamps and the retention window.
    pub clock: Arc<dyn Clock>,

    /// Interval, default template, embed color and timeouts.
    pub settings: NotifierSettings,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `feed` - Feed source used for polling and setup
    /// - `sink` - Notification sink used for posting
    /// - `clock` - Time source
    /// - `settings` - Runtime settings
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        feed: Arc<dyn FeedSource>,
        sink: Arc<dyn NotificationSink>,
        clock: Arc<dyn Clock>,
        settings: NotifierSettings,
    ) -> Self {
        Self {
            db,
            feed,
            sink,
            clock,
            settings,
        }
    }

    /// Poller borrowing this state's collaborators.
    pub fn poller(&self) -> FeedPoller<'_> {
        FeedPoller::new(
            &self.db,
            self.feed.as_ref(),
            self.sink.as_ref(),
            self.clock.as_ref(),
            &self.settings,
        )
    }
}
