//! Ticket message factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a ticket message with the given content and timestamp.
///
/// # Arguments
/// - `db` - Database connection
/// - `ticket_id` - Ticket the message belongs to
/// - `content` - Message text
/// - `timestamp` - When the message was sent
pub async fn create_ticket_message_at(
    db: &DatabaseConnection,
    ticket_id: i32,
    content: impl Into<String>,
    timestamp: DateTime<Utc>,
) -> Result<entity::ticket_message::Model, DbErr> {
    let id = next_id();
    entity::ticket_message::ActiveModel {
        id: ActiveValue::NotSet,
        ticket_id: ActiveValue::Set(ticket_id),
        sender_user_id: ActiveValue::Set(format!("{}", 600_000_000 + id)),
        sender_username: ActiveValue::Set(format!("sender{}", id)),
        content: ActiveValue::Set(content.into()),
        timestamp: ActiveValue::Set(timestamp),
    }
    .insert(db)
    .await
}

/// Creates a ticket message sent now.
pub async fn create_ticket_message(
    db: &DatabaseConnection,
    ticket_id: i32,
) -> Result<entity::ticket_message::Model, DbErr> {
    create_ticket_message_at(db, ticket_id, format!("message {}", next_id()), Utc::now()).await
}
