use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(string(Ticket::TicketType))
                    .col(string(Ticket::CreatorUserId))
                    .col(string(Ticket::CreatorUsername))
                    .col(string(Ticket::GuildId))
                    .col(string_null(Ticket::ThreadId))
                    .col(string_null(Ticket::AssignedStaffUserId))
                    .col(string(Ticket::Status).default("open"))
                    .col(
                        timestamp(Ticket::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(Ticket::ClosedAt))
                    .col(text_null(Ticket::ClosureReason))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_thread_status")
                    .table(Ticket::Table)
                    .col(Ticket::ThreadId)
                    .col(Ticket::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_ticket_thread_status")
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    TicketType,
    CreatorUserId,
    CreatorUsername,
    GuildId,
    ThreadId,
    AssignedStaffUserId,
    Status,
    CreatedAt,
    ClosedAt,
    ClosureReason,
}
