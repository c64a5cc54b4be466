use super::*;
use crate::service::poller::RETENTION_DAYS;
use chrono::TimeZone;

/// Tests that cleanup only purges inactive mappings older than the retention window.
///
/// Verifies that recently deactivated mappings and active mappings of any age survive.
///
/// Expected: Ok(1) with only the stale inactive mapping deleted
#[tokio::test]
async fn purges_stale_inactive_mappings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let stale = NotificationMappingFactory::new(db)
        .is_active(false)
        .updated_at(now - Duration::days(RETENTION_DAYS + 1))
        .build()
        .await?;
    let recent = NotificationMappingFactory::new(db)
        .is_active(false)
        .updated_at(now - Duration::days(RETENTION_DAYS - 1))
        .build()
        .await?;
    let active = NotificationMappingFactory::new(db)
        .updated_at(now - Duration::days(RETENTION_DAYS * 4))
        .build()
        .await?;

    let feed = FakeFeedSource::new();
    let sink = RecordingSink::new();
    let clock = ManualClock::new(now);
    let settings = NotifierSettings::default();

    let poller = FeedPoller::new(db, &feed, &sink, &clock, &settings);
    let deleted = poller.cleanup_inactive().await?;

    assert_eq!(deleted, 1);
    let remaining: Vec<i32> = entity::prelude::NotificationMapping::find()
        .all(db)
        .await?
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert!(!remaining.contains(&stale.id));
    assert!(remaining.contains(&recent.id));
    assert!(remaining.contains(&active.id));

    Ok(())
}

/// Tests that the retention window is measured from the injected clock.
///
/// Expected: nothing purged until the clock passes the window
#[tokio::test]
async fn follows_clock() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    NotificationMappingFactory::new(db)
        .is_active(false)
        .updated_at(now)
        .build()
        .await?;

    let feed = FakeFeedSource::new();
    let sink = RecordingSink::new();
    let clock = ManualClock::new(now);
    let settings = NotifierSettings::default();

    let poller = FeedPoller::new(db, &feed, &sink, &clock, &settings);
    assert_eq!(poller.cleanup_inactive().await?, 0);

    clock.advance(Duration::days(RETENTION_DAYS) + Duration::minutes(1));
    assert_eq!(poller.cleanup_inactive().await?, 1);

    let count = entity::prelude::NotificationMapping::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests the deactivate-then-purge lifecycle under a fixed clock.
///
/// Verifies that a mapping deactivated by a cycle is stamped with the clock's time, so
/// it is kept within the retention window and purged once the clock passes it.
///
/// Expected: Ok(0) right after deactivation, Ok(1) after RETENTION_DAYS + 1 days
#[tokio::test]
async fn purges_mapping_deactivated_by_cycle() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let channel_id = "UCsBjURrPoezykLs9EqgamOA";
    NotificationMappingFactory::new(db)
        .source_channel_id(channel_id)
        .build()
        .await?;

    let feed = FakeFeedSource::new();
    feed.set_not_found(channel_id);
    let sink = RecordingSink::new();
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap());
    let settings = NotifierSettings::default();

    let poller = FeedPoller::new(db, &feed, &sink, &clock, &settings);
    let report = poller.run_cycle().await?;
    assert_eq!(report.deactivated, 1);

    assert_eq!(poller.cleanup_inactive().await?, 0);

    clock.advance(Duration::days(RETENTION_DAYS + 1));
    assert_eq!(poller.cleanup_inactive().await?, 1);

    let count = entity::prelude::NotificationMapping::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
