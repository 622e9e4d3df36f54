use sea_orm_migration::{prelude::*, schema::*};

use super::m20250215_000004_create_ticket_table::Ticket;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(TicketMessage::Id))
                    .col(integer(TicketMessage::TicketId))
                    .col(string(TicketMessage::SenderUserId))
                    .col(string(TicketMessage::SenderUsername))
                    .col(text(TicketMessage::Content))
                    .col(timestamp(TicketMessage::Timestamp))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_message_ticket_id")
                            .from(TicketMessage::Table, TicketMessage::TicketId)
                            .to(Ticket::Table, Ticket::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_message_ticket_id")
                    .table(TicketMessage::Table)
                    .col(TicketMessage::TicketId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_ticket_message_ticket_id")
                    .table(TicketMessage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TicketMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TicketMessage {
    Table,
    Id,
    TicketId,
    SenderUserId,
    SenderUsername,
    Content,
    Timestamp,
}
