//! Scheduled feed checks.
//!
//! Three jobs run on the cron scheduler:
//! - a poll job repeating every configured check interval
//! - a one-shot poll shortly after startup, so the first check doesn't wait a full interval
//! - a daily cleanup of mappings that have been inactive past the retention window
//!
//! Poll ticks share a `CycleGuard`; a tick that fires while the previous cycle is still
//! running is skipped.

use std::{sync::Arc, time::Duration};

use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError, scheduler::guard::CycleGuard, service::poller::CycleReport,
    state::AppState,
};

/// Delay before the first poll after startup.
pub const INITIAL_CHECK_DELAY: Duration = Duration::from_secs(5);

/// Period of the inactive mapping cleanup.
pub const CLEANUP_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

/// What a poll tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The cycle ran to completion.
    Completed(CycleReport),
    /// A previous cycle was still running.
    Skipped,
    /// The cycle couldn't start (active mappings couldn't be loaded).
    Failed,
}

/// Owns the cron scheduler running the feed check and cleanup jobs.
pub struct FeedCheckScheduler {
    scheduler: JobScheduler,
}

impl FeedCheckScheduler {
    /// Registers the poll, initial poll and cleanup jobs and starts the scheduler.
    ///
    /// # Arguments
    /// - `state` - Application state shared with every job
    ///
    /// # Returns
    /// - `Ok(FeedCheckScheduler)` - Jobs are running
    /// - `Err(AppError::SchedulerErr)` - Scheduler couldn't be created or started
    pub async fn start(state: AppState) -> Result<Self, AppError> {
        let scheduler = JobScheduler::new().await?;
        let guard = Arc::new(CycleGuard::new());
        let interval = state.settings.check_interval;

        let job_state = state.clone();
        let job_guard = guard.clone();
        let poll_job = Job::new_repeated_async(interval, move |_uuid, _lock| {
            let state = job_state.clone();
            let guard = job_guard.clone();

            Box::pin(async move {
                run_poll_tick(&state, &guard).await;
            })
        })?;

        let job_state = state.clone();
        let job_guard = guard.clone();
        let initial_job = Job::new_one_shot_async(INITIAL_CHECK_DELAY, move |_uuid, _lock| {
            let state = job_state.clone();
            let guard = job_guard.clone();

            Box::pin(async move {
                run_poll_tick(&state, &guard).await;
            })
        })?;

        let job_state = state.clone();
        let cleanup_job = Job::new_repeated_async(CLEANUP_INTERVAL, move |_uuid, _lock| {
            let state = job_state.clone();

            Box::pin(async move {
                run_cleanup_tick(&state).await;
            })
        })?;

        scheduler.add(poll_job).await?;
        scheduler.add(initial_job).await?;
        scheduler.add(cleanup_job).await?;
        scheduler.start().await?;

        tracing::info!(
            "Feed check scheduler started (interval {:?}, first check in {:?})",
            interval,
            INITIAL_CHECK_DELAY
        );

        Ok(Self { scheduler })
    }

    /// Stops all jobs. A cycle already in progress is abandoned.
    pub async fn shutdown(mut self) -> Result<(), AppError> {
        self.scheduler.shutdown().await?;

        tracing::info!("Feed check scheduler stopped");

        Ok(())
    }
}

/// Runs one polling cycle unless another one is still in progress.
pub async fn run_poll_tick(state: &AppState, guard: &CycleGuard) -> TickOutcome {
    let Some(_token) = guard.try_acquire() else {
        tracing::warn!("Previous feed check still running, skipping this tick");
        return TickOutcome::Skipped;
    };

    match state.poller().run_cycle().await {
        Ok(report) => {
            tracing::info!(
                "Feed check finished: {} checked, {} notified, {} deactivated, {} failed",
                report.checked,
                report.notified,
                report.deactivated,
                report.failed
            );
            TickOutcome::Completed(report)
        }
        Err(e) => {
            tracing::error!("Feed check failed: {}", e);
            TickOutcome::Failed
        }
    }
}

/// Purges mappings inactive past the retention window.
pub async fn run_cleanup_tick(state: &AppState) -> Option<u64> {
    match state.poller().cleanup_inactive().await {
        Ok(deleted) => {
            if deleted > 0 {
                tracing::info!("Removed {} inactive notifications", deleted);
            }
            Some(deleted)
        }
        Err(e) => {
            tracing::error!("Inactive notification cleanup failed: {}", e);
            None
        }
    }
}
