use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerSetting::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerSetting::Id))
                    .col(string(ServerSetting::GuildId).unique_key())
                    .col(string_null(ServerSetting::ChannelId))
                    .col(
                        timestamp(ServerSetting::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerSetting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerSetting {
    Table,
    Id,
    GuildId,
    ChannelId,
    UpdatedAt,
}
