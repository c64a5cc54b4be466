//! Notification mapping factory for creating test mapping records.

use crate::factory::helpers::{next_id, next_youtube_channel_id};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notification mappings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::notification_mapping::NotificationMappingFactory;
///
/// let mapping = NotificationMappingFactory::new(&db)
///     .guild_id("111")
///     .last_seen_entry_id(Some("abc".to_string()))
///     .build()
///     .await?;
/// ```
pub struct NotificationMappingFactory<'a> {
    db: &'a DatabaseConnection,
    source_channel_id: String,
    source_channel_name: String,
    guild_id: String,
    target_channel_id: String,
    custom_template: Option<String>,
    last_seen_entry_id: Option<String>,
    last_checked_at: DateTime<Utc>,
    created_by: String,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<'a> NotificationMappingFactory<'a> {
    /// Creates a new NotificationMappingFactory with default values.
    ///
    /// Defaults:
    /// - source_channel_id: unique well-formed `UC...` ID
    /// - source_channel_name: `"Channel {id}"`
    /// - guild_id / target_channel_id / created_by: unique numeric strings
    /// - custom_template / last_seen_entry_id: `None`
    /// - is_active: `true`
    /// - all timestamps: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            source_channel_id: next_youtube_channel_id(),
            source_channel_name: format!("Channel {}", id),
            guild_id: (100_000_000 + id).to_string(),
            target_channel_id: (200_000_000 + id).to_string(),
            custom_template: None,
            last_seen_entry_id: None,
            last_checked_at: now,
            created_by: (300_000_000 + id).to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn source_channel_id(mut self, source_channel_id: impl Into<String>) -> Self {
        self.source_channel_id = source_channel_id.into();
        self
    }

    pub fn source_channel_name(mut self, source_channel_name: impl Into<String>) -> Self {
        self.source_channel_name = source_channel_name.into();
        self
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn target_channel_id(mut self, target_channel_id: impl Into<String>) -> Self {
        self.target_channel_id = target_channel_id.into();
        self
    }

    pub fn custom_template(mut self, custom_template: Option<String>) -> Self {
        self.custom_template = custom_template;
        self
    }

    pub fn last_seen_entry_id(mut self, last_seen_entry_id: Option<String>) -> Self {
        self.last_seen_entry_id = last_seen_entry_id;
        self
    }

    pub fn last_checked_at(mut self, last_checked_at: DateTime<Utc>) -> Self {
        self.last_checked_at = last_checked_at;
        self
    }

    pub fn created_by(mut self, created_by: impl Into<String>) -> Self {
        self.created_by = created_by.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the creation timestamp, which determines list ordering.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Sets the update timestamp, which the retention sweep compares against.
    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Builds and inserts the notification mapping into the database.
    ///
    /// # Returns
    /// - `Ok(entity::notification_mapping::Model)` - Created mapping entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::notification_mapping::Model, DbErr> {
        entity::notification_mapping::ActiveModel {
            id: ActiveValue::NotSet,
            source_channel_id: ActiveValue::Set(self.source_channel_id),
            source_channel_name: ActiveValue::Set(self.source_channel_name),
            guild_id: ActiveValue::Set(self.guild_id),
            target_channel_id: ActiveValue::Set(self.target_channel_id),
            custom_template: ActiveValue::Set(self.custom_template),
            last_seen_entry_id: ActiveValue::Set(self.last_seen_entry_id),
            last_checked_at: ActiveValue::Set(self.last_checked_at),
            created_by: ActiveValue::Set(self.created_by),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a notification mapping with default values.
///
/// Shorthand for `NotificationMappingFactory::new(db).build().await`.
pub async fn create_notification_mapping(
    db: &DatabaseConnection,
) -> Result<entity::notification_mapping::Model, DbErr> {
    NotificationMappingFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_mapping_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_notification_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let mapping = create_notification_mapping(db).await?;

        assert!(mapping.source_channel_id.starts_with("UC"));
        assert_eq!(mapping.source_channel_id.len(), 24);
        assert!(mapping.is_active);
        assert!(mapping.last_seen_entry_id.is_none());
        assert!(mapping.custom_template.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_mappings() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_notification_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_notification_mapping(db).await?;
        let second = create_notification_mapping(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.source_channel_id, second.source_channel_id);

        Ok(())
    }

    #[tokio::test]
    async fn rejects_duplicate_triple() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_notification_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_notification_mapping(db).await?;
        let duplicate = NotificationMappingFactory::new(db)
            .source_channel_id(&first.source_channel_id)
            .guild_id(&first.guild_id)
            .target_channel_id(&first.target_channel_id)
            .build()
            .await;

        assert!(duplicate.is_err());

        Ok(())
    }
}
