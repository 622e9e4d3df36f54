use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(pk_auto(Schedule::Id))
                    .col(string_null(Schedule::MessageId).unique_key())
                    .col(string_null(Schedule::ChannelId))
                    .col(string(Schedule::GuildId))
                    .col(string(Schedule::Title))
                    .col(text(Schedule::Description))
                    .col(timestamp(Schedule::StartTime))
                    .col(timestamp(Schedule::EndTime))
                    .col(string_null(Schedule::HostId))
                    .col(string_null(Schedule::HostName))
                    .col(string(Schedule::HostUrl))
                    .col(string_null(Schedule::WorldLink))
                    .col(string_null(Schedule::ImageUrl))
                    .col(string(Schedule::RoleId).unique_key())
                    .col(boolean(Schedule::IsActive).default(false))
                    .col(boolean(Schedule::HasEnded).default(false))
                    .col(
                        timestamp(Schedule::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Lifecycle job and API both filter on these
        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_guild_start")
                    .table(Schedule::Table)
                    .col(Schedule::GuildId)
                    .col(Schedule::StartTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schedule_has_ended")
                    .table(Schedule::Table)
                    .col(Schedule::HasEnded)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_schedule_has_ended")
                    .table(Schedule::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_schedule_guild_start")
                    .table(Schedule::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Schedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Schedule {
    Table,
    Id,
    MessageId,
    ChannelId,
    GuildId,
    Title,
    Description,
    StartTime,
    EndTime,
    HostId,
    HostName,
    HostUrl,
    WorldLink,
    ImageUrl,
    RoleId,
    IsActive,
    HasEnded,
    CreatedAt,
}
