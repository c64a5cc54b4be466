use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NotificationMapping::Table)
                    .if_not_exists()
                    .col(pk_auto(NotificationMapping::Id))
                    .col(string(NotificationMapping::SourceChannelId))
                    .col(string(NotificationMapping::SourceChannelName))
                    .col(string(NotificationMapping::GuildId))
                    .col(string(NotificationMapping::TargetChannelId))
                    .col(text_null(NotificationMapping::CustomTemplate))
                    .col(string_null(NotificationMapping::LastSeenEntryId))
                    .col(
                        timestamp(NotificationMapping::LastCheckedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(string(NotificationMapping::CreatedBy))
                    .col(boolean(NotificationMapping::IsActive).default(true))
                    .col(
                        timestamp(NotificationMapping::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(NotificationMapping::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // One mapping per YouTube channel per Discord channel per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_notification_mapping_unique")
                    .table(NotificationMapping::Table)
                    .col(NotificationMapping::SourceChannelId)
                    .col(NotificationMapping::GuildId)
                    .col(NotificationMapping::TargetChannelId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notification_mapping_source_channel_id")
                    .table(NotificationMapping::Table)
                    .col(NotificationMapping::SourceChannelId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_notification_mapping_guild_id")
                    .table(NotificationMapping::Table)
                    .col(NotificationMapping::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_notification_mapping_guild_id",
            "idx_notification_mapping_source_channel_id",
            "idx_notification_mapping_unique",
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .name(name)
                        .table(NotificationMapping::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(NotificationMapping::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NotificationMapping {
    Table,
    Id,
    SourceChannelId,
    SourceChannelName,
    GuildId,
    TargetChannelId,
    CustomTemplate,
    LastSeenEntryId,
    LastCheckedAt,
    CreatedBy,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
