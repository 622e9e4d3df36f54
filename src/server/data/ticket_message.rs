use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::ticket_message::{CreateTicketMessageParam, TicketMessage},
};

pub struct TicketMessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketMessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateTicketMessageParam) -> Result<TicketMessage, AppError> {
        let entity = entity::ticket_message::ActiveModel {
            ticket_id: ActiveValue::Set(param.ticket_id),
            sender_user_id: ActiveValue::Set(param.sender_user_id.to_string()),
            sender_username: ActiveValue::Set(param.sender_username),
            content: ActiveValue::Set(param.content),
            timestamp: ActiveValue::Set(param.timestamp),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        TicketMessage::from_entity(entity)
    }

    /// Gets a ticket's messages in the order they were sent.
    pub async fn get_by_ticket(&self, ticket_id: i32) -> Result<Vec<TicketMessage>, AppError> {
        let entities = entity::prelude::TicketMessage::find()
            .filter(entity::ticket_message::Column::TicketId.eq(ticket_id))
            .order_by_asc(entity::ticket_message::Column::Timestamp)
            .order_by_asc(entity::ticket_message::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(TicketMessage::from_entity).collect()
    }

    pub async fn count_by_ticket(&self, ticket_id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::TicketMessage::find()
            .filter(entity::ticket_message::Column::TicketId.eq(ticket_id))
            .count(self.db)
            .await?;
        Ok(count)
    }
}
