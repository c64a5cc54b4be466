//! Domain models for notification mapping operations.
//!
//! A notification mapping binds one YouTube channel to one Discord text channel within a
//! guild. These models sit between the repository and the service/bot layers, with
//! conversion from entity models at the repository boundary.

use chrono::{DateTime, Utc};

/// Number of mappings shown by the list command.
pub const LIST_PAGE_SIZE: u64 = 25;

/// A persisted notification mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationMapping {
    /// Unique identifier for the mapping record.
    pub id: i32,
    /// YouTube channel ID (`UC...`).
    pub source_channel_id: String,
    /// YouTube channel title captured when the mapping was created.
    pub source_channel_name: String,
    /// Discord guild ID owning the mapping (stored as String).
    pub guild_id: String,
    /// Discord channel ID receiving notifications (stored as String).
    pub target_channel_id: String,
    /// Message template overriding the configured default.
    pub custom_template: Option<String>,
    /// Video ID of the most recently notified (or seeded) upload.
    pub last_seen_entry_id: Option<String>,
    /// Timestamp of the last state-changing check.
    pub last_checked_at: DateTime<Utc>,
    /// Discord user ID of the member who set up the mapping.
    pub created_by: String,
    /// Inactive mappings are skipped by the poller and eventually purged.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NotificationMapping {
    /// Converts an entity model to a notification mapping domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `NotificationMapping` - The converted domain model
    pub fn from_entity(entity: entity::notification_mapping::Model) -> Self {
        Self {
            id: entity.id,
            source_channel_id: entity.source_channel_id,
            source_channel_name: entity.source_channel_name,
            guild_id: entity.guild_id,
            target_channel_id: entity.target_channel_id,
            custom_template: entity.custom_template,
            last_seen_entry_id: entity.last_seen_entry_id,
            last_checked_at: entity.last_checked_at,
            created_by: entity.created_by,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// The `(source_channel_id, guild_id, target_channel_id)` triple identifying a mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MappingKey {
    pub source_channel_id: String,
    pub guild_id: String,
    pub target_channel_id: String,
}

/// Typed filter over notification mappings.
///
/// Every field that is `Some` must match; an empty filter matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingFilter {
    pub source_channel_id: Option<String>,
    pub guild_id: Option<String>,
    pub target_channel_id: Option<String>,
    pub is_active: Option<bool>,
    /// Matches records whose `updated_at` is strictly before this instant.
    pub updated_before: Option<DateTime<Utc>>,
}

impl MappingFilter {
    /// Matches only active mappings.
    pub fn active() -> Self {
        Self {
            is_active: Some(true),
            ..Default::default()
        }
    }

    /// Matches active mappings of a single guild.
    pub fn active_in_guild(guild_id: impl Into<String>) -> Self {
        Self {
            guild_id: Some(guild_id.into()),
            is_active: Some(true),
            ..Default::default()
        }
    }

    /// Matches inactive mappings last updated before `cutoff`.
    pub fn inactive_before(cutoff: DateTime<Utc>) -> Self {
        Self {
            is_active: Some(false),
            updated_before: Some(cutoff),
            ..Default::default()
        }
    }
}

impl From<MappingKey> for MappingFilter {
    fn from(key: MappingKey) -> Self {
        Self {
            source_channel_id: Some(key.source_channel_id),
            guild_id: Some(key.guild_id),
            target_channel_id: Some(key.target_channel_id),
            ..Default::default()
        }
    }
}

/// Parameters for inserting a new mapping record.
#[derive(Debug, Clone)]
pub struct CreateNotificationMappingParam {
    pub source_channel_id: String,
    pub source_channel_name: String,
    pub guild_id: String,
    pub target_channel_id: String,
    pub custom_template: Option<String>,
    /// Top entry at creation time, so the first poll doesn't announce an old upload.
    pub last_seen_entry_id: Option<String>,
    pub created_by: String,
    /// Creation time; also the initial `last_checked_at` and `updated_at`.
    pub created_at: DateTime<Utc>,
}

/// Partial update of a mapping; only `Some` fields are written.
#[derive(Debug, Clone)]
pub struct UpdateNotificationMappingParam {
    pub last_seen_entry_id: Option<String>,
    pub last_checked_at: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
    /// Always written; the retention purge measures age from it.
    pub updated_at: DateTime<Utc>,
}

impl UpdateNotificationMappingParam {
    /// An update that only refreshes `updated_at`.
    pub fn at(updated_at: DateTime<Utc>) -> Self {
        Self {
            last_seen_entry_id: None,
            last_checked_at: None,
            is_active: None,
            updated_at,
        }
    }
}

/// Parameters of the setup command.
#[derive(Debug, Clone)]
pub struct CreateNotificationParam {
    /// YouTube channel ID as typed by the user.
    pub source_channel_id: String,
    pub guild_id: u64,
    pub target_channel_id: u64,
    pub custom_template: Option<String>,
    /// Discord user ID of the member running the command.
    pub requested_by: u64,
}

/// First page of a guild's mappings as shown by the list command.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingPage {
    /// Up to `LIST_PAGE_SIZE` mappings in creation order.
    pub mappings: Vec<NotificationMapping>,
    /// Total number of matching mappings.
    pub total: u64,
    /// Number of mappings not shown.
    pub remainder: u64,
}
