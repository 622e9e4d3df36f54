use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::AppError,
    model::ticket::{CreateTicketParam, Ticket, TicketStatus},
};

pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a new ticket without a thread.
    pub async fn create(&self, param: CreateTicketParam) -> Result<Ticket, AppError> {
        let entity = entity::ticket::ActiveModel {
            ticket_type: ActiveValue::Set(param.ticket_type.as_str().to_string()),
            creator_user_id: ActiveValue::Set(param.creator_user_id.to_string()),
            creator_username: ActiveValue::Set(param.creator_username),
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            thread_id: ActiveValue::Set(None),
            assigned_staff_user_id: ActiveValue::Set(None),
            status: ActiveValue::Set(TicketStatus::Open.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            closed_at: ActiveValue::Set(None),
            closure_reason: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ticket::from_entity(entity)
    }

    pub async fn set_thread_id(&self, id: i32, thread_id: u64) -> Result<Ticket, AppError> {
        let entity = entity::ticket::ActiveModel {
            id: ActiveValue::Unchanged(id),
            thread_id: ActiveValue::Set(Some(thread_id.to_string())),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ticket::from_entity(entity)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Ticket>, AppError> {
        entity::prelude::Ticket::find_by_id(id)
            .one(self.db)
            .await?
            .map(Ticket::from_entity)
            .transpose()
    }

    /// Finds the open ticket attached to a thread.
    pub async fn get_open_by_thread(&self, thread_id: u64) -> Result<Option<Ticket>, AppError> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::ThreadId.eq(thread_id.to_string()))
            .filter(entity::ticket::Column::Status.eq(TicketStatus::Open.as_str()))
            .one(self.db)
            .await?
            .map(Ticket::from_entity)
            .transpose()
    }

    /// Gets open tickets in a guild, newest first.
    pub async fn get_open_by_guild(&self, guild_id: u64) -> Result<Vec<Ticket>, AppError> {
        let entities = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::ticket::Column::Status.eq(TicketStatus::Open.as_str()))
            .order_by_desc(entity::ticket::Column::CreatedAt)
            .order_by_desc(entity::ticket::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Ticket::from_entity).collect()
    }

    /// Closes an open ticket.
    ///
    /// # Returns
    /// - `Ok(Some(Ticket))`: The ticket was open and is now closed
    /// - `Ok(None)`: No such ticket, or it was already closed
    pub async fn close(&self, id: i32, reason: Option<String>) -> Result<Option<Ticket>, AppError> {
        let Some(existing) = entity::prelude::Ticket::find_by_id(id)
            .filter(entity::ticket::Column::Status.eq(TicketStatus::Open.as_str()))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::ticket::ActiveModel = existing.into();
        active.status = ActiveValue::Set(TicketStatus::Closed.as_str().to_string());
        active.closed_at = ActiveValue::Set(Some(Utc::now()));
        active.closure_reason = ActiveValue::Set(reason);

        let entity = active.update(self.db).await?;
        Ticket::from_entity(entity).map(Some)
    }

    /// Deletes a ticket and its messages.
    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::Ticket::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }
}
