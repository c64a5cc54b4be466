use sea_orm::entity::prelude::*;

/// A YouTube channel bound to a Discord text channel within one guild.
///
/// The `(source_channel_id, guild_id, target_channel_id)` triple is unique; the
/// index is created by the migration crate.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notification_mapping")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub source_channel_id: String,
    pub source_channel_name: String,
    pub guild_id: String,
    pub target_channel_id: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub custom_template: Option<String>,
    #[sea_orm(nullable)]
    pub last_seen_entry_id: Option<String>,
    pub last_checked_at: DateTimeUtc,
    pub created_by: String,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
