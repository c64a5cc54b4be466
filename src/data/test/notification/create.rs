use super::*;
use crate::data::is_unique_violation;

fn create_param(source_channel_id: &str) -> CreateNotificationMappingParam {
    CreateNotificationMappingParam {
        source_channel_id: source_channel_id.to_string(),
        source_channel_name: "Rust Videos".to_string(),
        guild_id: "111".to_string(),
        target_channel_id: "222".to_string(),
        custom_template: None,
        last_seen_entry_id: Some("dQw4w9WgXcQ".to_string()),
        created_by: "333".to_string(),
        created_at: Utc::now(),
    }
}

/// Tests creating a new notification mapping.
///
/// Verifies that the repository stores every provided field and initializes the
/// mapping as active with all timestamps set.
///
/// Expected: Ok with mapping created
#[tokio::test]
async fn creates_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now();
    let repo = NotificationMappingRepository::new(db);
    let mapping = repo.create(create_param("UCaaaaaaaaaaaaaaaaaaaaaa")).await?;

    assert_eq!(mapping.source_channel_id, "UCaaaaaaaaaaaaaaaaaaaaaa");
    assert_eq!(mapping.source_channel_name, "Rust Videos");
    assert_eq!(mapping.guild_id, "111");
    assert_eq!(mapping.target_channel_id, "222");
    assert_eq!(mapping.created_by, "333");
    assert_eq!(mapping.last_seen_entry_id.as_deref(), Some("dQw4w9WgXcQ"));
    assert!(mapping.custom_template.is_none());
    assert!(mapping.is_active);
    assert!(mapping.created_at >= before);
    assert_eq!(mapping.created_at, mapping.updated_at);

    // Verify mapping exists in database
    let db_mapping = entity::prelude::NotificationMapping::find_by_id(mapping.id)
        .one(db)
        .await?;
    assert!(db_mapping.is_some());

    Ok(())
}

/// Tests creating a mapping that keeps a custom template.
///
/// Expected: Ok with custom template stored verbatim
#[tokio::test]
async fn creates_mapping_with_custom_template() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationMappingRepository::new(db);
    let mut param = create_param("UCbbbbbbbbbbbbbbbbbbbbbb");
    param.custom_template = Some("New: {{video_title}}".to_string());
    let mapping = repo.create(param).await?;

    assert_eq!(
        mapping.custom_template.as_deref(),
        Some("New: {{video_title}}")
    );

    Ok(())
}

/// Tests that the same source/guild/target triple cannot be inserted twice.
///
/// Verifies that the unique index rejects the second insert and that the error
/// is recognized as a unique constraint violation.
///
/// Expected: Err(DbErr) classified as unique violation
#[tokio::test]
async fn rejects_duplicate_triple() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationMappingRepository::new(db);
    repo.create(create_param("UCcccccccccccccccccccccc")).await?;
    let result = repo.create(create_param("UCcccccccccccccccccccccc")).await;

    assert!(result.is_err());
    assert!(is_unique_violation(&result.unwrap_err()));

    let count = entity::prelude::NotificationMapping::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the same source channel may target different channels.
///
/// Expected: Ok with two mappings created
#[tokio::test]
async fn allows_same_source_in_different_targets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NotificationMappingRepository::new(db);
    repo.create(create_param("UCdddddddddddddddddddddd")).await?;
    let mut param = create_param("UCdddddddddddddddddddddd");
    param.target_channel_id = "444".to_string();
    repo.create(param).await?;

    let count = entity::prelude::NotificationMapping::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
