use super::*;

/// Tests updating the last seen entry of a mapping.
///
/// Verifies that only the provided fields change and that `updated_at` is refreshed.
///
/// Expected: Ok with last_seen_entry_id and last_checked_at updated
#[tokio::test]
async fn updates_last_seen_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let past = Utc::now() - Duration::days(1);
    let existing = NotificationMappingFactory::new(db)
        .last_seen_entry_id(Some("old".to_string()))
        .last_checked_at(past)
        .updated_at(past)
        .build()
        .await?;

    let checked_at = Utc::now();
    let repo = NotificationMappingRepository::new(db);
    let updated = repo
        .update_by_id(
            existing.id,
            UpdateNotificationMappingParam {
                last_seen_entry_id: Some("new".to_string()),
                last_checked_at: Some(checked_at),
                ..UpdateNotificationMappingParam::at(checked_at)
            },
        )
        .await?;

    assert_eq!(updated.last_seen_entry_id.as_deref(), Some("new"));
    assert_eq!(updated.last_checked_at, checked_at);
    assert!(updated.is_active);
    assert_eq!(updated.updated_at, checked_at);
    assert_eq!(updated.source_channel_id, existing.source_channel_id);
    assert_eq!(updated.created_at, existing.created_at);

    Ok(())
}

/// Tests deactivating a mapping.
///
/// Expected: Ok with is_active false and last seen entry unchanged
#[tokio::test]
async fn deactivates_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = NotificationMappingFactory::new(db)
        .last_seen_entry_id(Some("keep".to_string()))
        .build()
        .await?;

    let deactivated_at = Utc::now();
    let repo = NotificationMappingRepository::new(db);
    let updated = repo
        .update_by_id(
            existing.id,
            UpdateNotificationMappingParam {
                is_active: Some(false),
                ..UpdateNotificationMappingParam::at(deactivated_at)
            },
        )
        .await?;

    assert!(!updated.is_active);
    assert_eq!(updated.last_seen_entry_id.as_deref(), Some("keep"));
    assert_eq!(updated.last_checked_at, existing.last_checked_at);
    assert_eq!(updated.updated_at, deactivated_at);

    Ok(())
}

/// Tests updating a mapping that does not exist.
///
/// Expected: Err(DbErr::RecordNotUpdated)
#[tokio::test]
async fn fails_for_missing_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationMappingRepository::new(db);
    let result = repo
        .update_by_id(
            9999,
            UpdateNotificationMappingParam {
                is_active: Some(false),
                ..UpdateNotificationMappingParam::at(Utc::now())
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
