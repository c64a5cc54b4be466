//! Notification mapping administration.
//!
//! Backs the `/notification setup`, `remove` and `list` commands. Setup validates input
//! before touching the network, rejects duplicates before fetching, and seeds the new
//! mapping with the channel's current top upload so the first poll doesn't announce an
//! old video.

use sea_orm::DatabaseConnection;

use crate::{
    data::{is_unique_violation, notification::NotificationMappingRepository},
    error::{notification::NotificationError, AppError},
    model::notification::{
        CreateNotificationMappingParam, CreateNotificationParam, MappingFilter, MappingKey,
        MappingPage, NotificationMapping, LIST_PAGE_SIZE,
    },
    service::{clock::Clock, feed::FeedSource},
};

/// Maximum length of a custom message template in characters.
pub const MAX_TEMPLATE_LEN: usize = 1000;

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    feed: &'a dyn FeedSource,
    clock: &'a dyn Clock,
}

impl<'a> NotificationService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        feed: &'a dyn FeedSource,
        clock: &'a dyn Clock,
    ) -> Self {
        Self { db, feed, clock }
    }

    /// Creates a notification mapping for a YouTube channel.
    ///
    /// # Arguments
    /// - `param` - Channel ID, guild, target channel, optional template and requester
    ///
    /// # Returns
    /// - `Ok(NotificationMapping)` - The created mapping
    /// - `Err(AppError::NotificationErr(InvalidChannelId | InvalidTemplate))` - Rejected input,
    ///   no feed was fetched
    /// - `Err(AppError::NotificationErr(DuplicateMapping))` - Mapping already exists
    /// - `Err(AppError::NotificationErr(ChannelNotFound))` - YouTube has no such channel
    /// - `Err(AppError::FeedErr)` - Transient feed failure
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn setup(
        &self,
        param: CreateNotificationParam,
    ) -> Result<NotificationMapping, AppError> {
        let source_channel_id = param.source_channel_id.trim().to_string();
        validate_channel_id(&source_channel_id)?;
        let custom_template = normalize_template(param.custom_template)?;

        let key = MappingKey {
            source_channel_id: source_channel_id.clone(),
            guild_id: param.guild_id.to_string(),
            target_channel_id: param.target_channel_id.to_string(),
        };

        let repo = NotificationMappingRepository::new(self.db);

        if repo.find_one(&key.clone().into()).await?.is_some() {
            return Err(duplicate(&key).into());
        }

        let feed = match self.feed.fetch_channel(&source_channel_id).await {
            Ok(feed) => feed,
            Err(err) if err.is_permanent() => {
                return Err(NotificationError::ChannelNotFound(source_channel_id).into())
            }
            Err(err) => return Err(err.into()),
        };

        let Some(channel_name) = feed.channel_name.clone() else {
            return Err(NotificationError::ChannelNotFound(source_channel_id).into());
        };

        let last_seen_entry_id = feed.latest().map(|entry| entry.entry_id.clone());

        let mapping = repo
            .create(CreateNotificationMappingParam {
                source_channel_id: key.source_channel_id.clone(),
                source_channel_name: channel_name,
                guild_id: key.guild_id.clone(),
                target_channel_id: key.target_channel_id.clone(),
                custom_template,
                last_seen_entry_id,
                created_by: param.requested_by.to_string(),
                created_at: self.clock.now(),
            })
            .await
            .map_err(|err| {
                if is_unique_violation(&err) {
                    AppError::from(duplicate(&key))
                } else {
                    AppError::from(err)
                }
            })?;

        tracing::info!(
            "Created notification {} for YouTube channel {} ({}) in guild {} channel {}",
            mapping.id,
            mapping.source_channel_name,
            mapping.source_channel_id,
            mapping.guild_id,
            mapping.target_channel_id
        );

        Ok(mapping)
    }

    /// Deletes the mapping identified by `key`.
    ///
    /// # Returns
    /// - `Ok(NotificationMapping)` - The deleted mapping
    /// - `Err(AppError::NotificationErr(MappingNotFound))` - No such mapping
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn remove(&self, key: MappingKey) -> Result<NotificationMapping, AppError> {
        let repo = NotificationMappingRepository::new(self.db);

        let Some(mapping) = repo.delete_one(&key.clone().into()).await? else {
            return Err(NotificationError::MappingNotFound {
                source_channel_id: key.source_channel_id,
                target_channel_id: key.target_channel_id,
            }
            .into());
        };

        tracing::info!(
            "Removed notification {} for YouTube channel {} in guild {} channel {}",
            mapping.id,
            mapping.source_channel_id,
            mapping.guild_id,
            mapping.target_channel_id
        );

        Ok(mapping)
    }

    /// Gets the first page of a guild's active mappings in creation order.
    ///
    /// # Returns
    /// - `Ok(MappingPage)` - Up to `LIST_PAGE_SIZE` mappings with total and remainder
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn list(&self, guild_id: u64) -> Result<MappingPage, AppError> {
        let repo = NotificationMappingRepository::new(self.db);

        let (mappings, total) = repo
            .find_page(&MappingFilter::active_in_guild(guild_id.to_string()), LIST_PAGE_SIZE)
            .await?;

        let remainder = total.saturating_sub(mappings.len() as u64);

        Ok(MappingPage {
            mappings,
            total,
            remainder,
        })
    }
}

/// Checks the `UC` + 22 character shape of a YouTube channel ID.
pub fn validate_channel_id(channel_id: &str) -> Result<(), NotificationError> {
    let well_formed = channel_id.len() == 24
        && channel_id.starts_with("UC")
        && channel_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if well_formed {
        Ok(())
    } else {
        Err(NotificationError::InvalidChannelId(channel_id.to_string()))
    }
}

/// Drops blank templates and rejects overly long ones.
fn normalize_template(template: Option<String>) -> Result<Option<String>, NotificationError> {
    let Some(template) = template.filter(|t| !t.trim().is_empty()) else {
        return Ok(None);
    };

    if template.chars().count() > MAX_TEMPLATE_LEN {
        return Err(NotificationError::InvalidTemplate(format!(
            "must be at most {} characters",
            MAX_TEMPLATE_LEN
        )));
    }

    Ok(Some(template))
}

fn duplicate(key: &MappingKey) -> NotificationError {
    NotificationError::DuplicateMapping {
        source_channel_id: key.source_channel_id.clone(),
        target_channel_id: key.target_channel_id.clone(),
    }
}
