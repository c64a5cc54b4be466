use super::*;

/// Tests that an empty filter returns every mapping in creation order.
///
/// Expected: Ok with all mappings, oldest first
#[tokio::test]
async fn finds_all_in_creation_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let newer = NotificationMappingFactory::new(db)
        .created_at(now)
        .build()
        .await?;
    let older = NotificationMappingFactory::new(db)
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = NotificationMappingRepository::new(db);
    let mappings = repo.find(&MappingFilter::default()).await?;

    assert_eq!(mappings.len(), 2);
    assert_eq!(mappings[0].id, older.id);
    assert_eq!(mappings[1].id, newer.id);

    Ok(())
}

/// Tests that the active filter excludes inactive mappings.
///
/// Expected: Ok with only the active mapping
#[tokio::test]
async fn filters_by_active_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::create_notification_mapping(db).await?;
    NotificationMappingFactory::new(db)
        .is_active(false)
        .build()
        .await?;

    let repo = NotificationMappingRepository::new(db);
    let mappings = repo.find(&MappingFilter::active()).await?;

    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[0].id, active.id);

    Ok(())
}

/// Tests that the guild filter only returns mappings of that guild.
///
/// Expected: Ok with the guild's mappings only
#[tokio::test]
async fn filters_by_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    NotificationMappingFactory::new(db)
        .guild_id("111")
        .build()
        .await?;
    NotificationMappingFactory::new(db)
        .guild_id("111")
        .build()
        .await?;
    NotificationMappingFactory::new(db)
        .guild_id("999")
        .build()
        .await?;

    let repo = NotificationMappingRepository::new(db);
    let mappings = repo.find(&MappingFilter::active_in_guild("111")).await?;

    assert_eq!(mappings.len(), 2);
    assert!(mappings.iter().all(|m| m.guild_id == "111"));

    Ok(())
}

/// Tests finding a single mapping by its full key.
///
/// Expected: Ok(Some) for the existing key, Ok(None) for a different target
#[tokio::test]
async fn finds_one_by_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_notification_mapping(db).await?;

    let repo = NotificationMappingRepository::new(db);
    let found = repo
        .find_one(&MappingFilter {
            source_channel_id: Some(existing.source_channel_id.clone()),
            guild_id: Some(existing.guild_id.clone()),
            target_channel_id: Some(existing.target_channel_id.clone()),
            ..Default::default()
        })
        .await?;
    assert_eq!(found.map(|m| m.id), Some(existing.id));

    let missing = repo
        .find_one(&MappingFilter {
            source_channel_id: Some(existing.source_channel_id.clone()),
            guild_id: Some(existing.guild_id.clone()),
            target_channel_id: Some("1".to_string()),
            ..Default::default()
        })
        .await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests the updated-before filter used by the retention sweep.
///
/// Expected: Ok with only the mapping updated before the cutoff
#[tokio::test]
async fn filters_by_updated_before() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let stale = NotificationMappingFactory::new(db)
        .is_active(false)
        .updated_at(now - Duration::days(10))
        .build()
        .await?;
    NotificationMappingFactory::new(db)
        .is_active(false)
        .updated_at(now - Duration::days(1))
        .build()
        .await?;

    let repo = NotificationMappingRepository::new(db);
    let mappings = repo
        .find(&MappingFilter::inactive_before(now - Duration::days(7)))
        .await?;

    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[0].id, stale.id);

    Ok(())
}

/// Tests that find_page caps results at the page size and reports the total.
///
/// Expected: Ok with first `page_size` mappings and the full match count
#[tokio::test]
async fn pages_results_with_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let base = Utc::now() - Duration::hours(1);
    for i in 0..5 {
        NotificationMappingFactory::new(db)
            .guild_id("111")
            .created_at(base + Duration::minutes(i))
            .build()
            .await?;
    }

    let repo = NotificationMappingRepository::new(db);
    let (mappings, total) = repo
        .find_page(&MappingFilter::active_in_guild("111"), 3)
        .await?;

    assert_eq!(mappings.len(), 3);
    assert_eq!(total, 5);
    assert!(mappings
        .windows(2)
        .all(|pair| pair[0].created_at <= pair[1].created_at));

    Ok(())
}

/// Tests find_page on a guild with no mappings.
///
/// Expected: Ok with empty page and zero total
#[tokio::test]
async fn pages_empty_result() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationMappingRepository::new(db);
    let (mappings, total) = repo
        .find_page(&MappingFilter::active_in_guild("111"), 25)
        .await?;

    assert!(mappings.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
