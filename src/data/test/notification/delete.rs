use super::*;

/// Tests deleting a single mapping by key.
///
/// Verifies that only the matching mapping is removed and that the deleted
/// record is returned.
///
/// Expected: Ok(Some) with the deleted mapping
#[tokio::test]
async fn deletes_one_matching_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_notification_mapping(db).await?;
    let other = factory::create_notification_mapping(db).await?;

    let repo = NotificationMappingRepository::new(db);
    let deleted = repo
        .delete_one(&MappingFilter {
            source_channel_id: Some(target.source_channel_id.clone()),
            guild_id: Some(target.guild_id.clone()),
            target_channel_id: Some(target.target_channel_id.clone()),
            ..Default::default()
        })
        .await?;

    assert_eq!(deleted.map(|m| m.id), Some(target.id));
    assert!(entity::prelude::NotificationMapping::find_by_id(target.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::NotificationMapping::find_by_id(other.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting when nothing matches.
///
/// Expected: Ok(None) and no records removed
#[tokio::test]
async fn delete_one_returns_none_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_notification_mapping(db).await?;

    let repo = NotificationMappingRepository::new(db);
    let deleted = repo
        .delete_one(&MappingFilter {
            source_channel_id: Some("UCzzzzzzzzzzzzzzzzzzzzzz".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(deleted.is_none());
    let count = entity::prelude::NotificationMapping::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests bulk deletion of stale inactive mappings.
///
/// Verifies that active mappings and recently deactivated mappings survive.
///
/// Expected: Ok(1) with only the stale inactive mapping removed
#[tokio::test]
async fn deletes_many_by_filter() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    NotificationMappingFactory::new(db)
        .is_active(false)
        .updated_at(now - Duration::days(8))
        .build()
        .await?;
    NotificationMappingFactory::new(db)
        .is_active(false)
        .updated_at(now - Duration::days(2))
        .build()
        .await?;
    NotificationMappingFactory::new(db)
        .updated_at(now - Duration::days(30))
        .build()
        .await?;

    let repo = NotificationMappingRepository::new(db);
    let deleted = repo
        .delete_many(&MappingFilter::inactive_before(now - Duration::days(7)))
        .await?;

    assert_eq!(deleted, 1);
    let count = entity::prelude::NotificationMapping::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
