//! Notification mapping repository for database operations.
//!
//! This module provides the `NotificationMappingRepository` for managing the mapping
//! records that bind YouTube channels to Discord channels. Lookups go through the typed
//! `MappingFilter` and results are converted to domain models at this boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::model::notification::{
    CreateNotificationMappingParam, MappingFilter, NotificationMapping,
    UpdateNotificationMappingParam,
};

use entity::notification_mapping::Column;

/// Repository providing database operations for notification mappings.
pub struct NotificationMappingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationMappingRepository<'a> {
    /// Creates a new NotificationMappingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `NotificationMappingRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all mappings matching the filter in creation order.
    ///
    /// # Arguments
    /// - `filter` - Typed filter; empty matches everything
    ///
    /// # Returns
    /// - `Ok(Vec<NotificationMapping>)` - Matching mappings, oldest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, filter: &MappingFilter) -> Result<Vec<NotificationMapping>, DbErr> {
        let entities = Self::select(filter).all(self.db).await?;

        Ok(entities
            .into_iter()
            .map(NotificationMapping::from_entity)
            .collect())
    }

    /// Gets the first mapping matching the filter.
    ///
    /// # Returns
    /// - `Ok(Some(NotificationMapping))` - Oldest matching mapping
    /// - `Ok(None)` - Nothing matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_one(
        &self,
        filter: &MappingFilter,
    ) -> Result<Option<NotificationMapping>, DbErr> {
        let entity = Self::select(filter).one(self.db).await?;

        Ok(entity.map(NotificationMapping::from_entity))
    }

    /// Gets the first page of matching mappings along with the total match count.
    ///
    /// # Arguments
    /// - `filter` - Typed filter
    /// - `page_size` - Maximum number of mappings to return
    ///
    /// # Returns
    /// - `Ok((Vec<NotificationMapping>, u64))` - Up to `page_size` mappings in creation order
    ///   and the total number of matches
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_page(
        &self,
        filter: &MappingFilter,
        page_size: u64,
    ) -> Result<(Vec<NotificationMapping>, u64), DbErr> {
        let paginator = Self::select(filter).paginate(self.db, page_size);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(0).await?;

        Ok((
            entities
                .into_iter()
                .map(NotificationMapping::from_entity)
                .collect(),
            total,
        ))
    }

    /// Inserts a new mapping.
    ///
    /// The mapping starts active with `last_checked_at`, `created_at` and `updated_at` set
    /// to `param.created_at`.
    ///
    /// # Arguments
    /// - `param` - Fields of the new mapping
    ///
    /// # Returns
    /// - `Ok(NotificationMapping)` - The created mapping
    /// - `Err(DbErr)` - Database error; a unique constraint violation when the
    ///   `(source_channel_id, guild_id, target_channel_id)` triple already exists
    pub async fn create(
        &self,
        param: CreateNotificationMappingParam,
    ) -> Result<NotificationMapping, DbErr> {
        let now = param.created_at;

        let entity = entity::notification_mapping::ActiveModel {
            id: ActiveValue::NotSet,
            source_channel_id: ActiveValue::Set(param.source_channel_id),
            source_channel_name: ActiveValue::Set(param.source_channel_name),
            guild_id: ActiveValue::Set(param.guild_id),
            target_channel_id: ActiveValue::Set(param.target_channel_id),
            custom_template: ActiveValue::Set(param.custom_template),
            last_seen_entry_id: ActiveValue::Set(param.last_seen_entry_id),
            last_checked_at: ActiveValue::Set(now),
            created_by: ActiveValue::Set(param.created_by),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Ok(NotificationMapping::from_entity(entity))
    }

    /// Partially updates a mapping by ID.
    ///
    /// Only fields present in the param are written. `updated_at` is always set.
    ///
    /// # Arguments
    /// - `id` - ID of the mapping to update
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(NotificationMapping)` - The updated mapping
    /// - `Err(DbErr::RecordNotUpdated)` - No mapping with this ID
    /// - `Err(DbErr)` - Other database error
    pub async fn update_by_id(
        &self,
        id: i32,
        param: UpdateNotificationMappingParam,
    ) -> Result<NotificationMapping, DbErr> {
        let mut active = entity::notification_mapping::ActiveModel {
            id: ActiveValue::Unchanged(id),
            updated_at: ActiveValue::Set(param.updated_at),
            ..Default::default()
        };

        if let Some(last_seen_entry_id) = param.last_seen_entry_id {
            active.last_seen_entry_id = ActiveValue::Set(Some(last_seen_entry_id));
        }
        if let Some(last_checked_at) = param.last_checked_at {
            active.last_checked_at = ActiveValue::Set(last_checked_at);
        }
        if let Some(is_active) = param.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }

        let entity = active.update(self.db).await?;

        Ok(NotificationMapping::from_entity(entity))
    }

    /// Deletes the first mapping matching the filter.
    ///
    /// # Returns
    /// - `Ok(Some(NotificationMapping))` - The deleted mapping
    /// - `Ok(None)` - Nothing matched, nothing deleted
    /// - `Err(DbErr)` - Database error
    pub async fn delete_one(
        &self,
        filter: &MappingFilter,
    ) -> Result<Option<NotificationMapping>, DbErr> {
        let Some(existing) = Self::select(filter).one(self.db).await? else {
            return Ok(None);
        };

        entity::prelude::NotificationMapping::delete_by_id(existing.id)
            .exec(self.db)
            .await?;

        Ok(Some(NotificationMapping::from_entity(existing)))
    }

    /// Deletes every mapping matching the filter.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of mappings deleted
    /// - `Err(DbErr)` - Database error
    pub async fn delete_many(&self, filter: &MappingFilter) -> Result<u64, DbErr> {
        let result = entity::prelude::NotificationMapping::delete_many()
            .filter(Self::condition(filter))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    fn select(filter: &MappingFilter) -> Select<entity::prelude::NotificationMapping> {
        entity::prelude::NotificationMapping::find()
            .filter(Self::condition(filter))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
    }

    fn condition(filter: &MappingFilter) -> Condition {
        let mut condition = Condition::all();

        if let Some(source_channel_id) = &filter.source_channel_id {
            condition = condition.add(Column::SourceChannelId.eq(source_channel_id.as_str()));
        }
        if let Some(guild_id) = &filter.guild_id {
            condition = condition.add(Column::GuildId.eq(guild_id.as_str()));
        }
        if let Some(target_channel_id) = &filter.target_channel_id {
            condition = condition.add(Column::TargetChannelId.eq(target_channel_id.as_str()));
        }
        if let Some(is_active) = filter.is_active {
            condition = condition.add(Column::IsActive.eq(is_active));
        }
        if let Some(cutoff) = filter.updated_before {
            condition = condition.add(Column::UpdatedAt.lt(cutoff));
        }

        condition
    }
}
