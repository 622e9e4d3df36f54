//! Messages mirrored from ticket threads.

use chrono::{DateTime, Utc};

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

#[derive(Debug, Clone, PartialEq)]
pub struct TicketMessage {
    pub id: i32,
    pub ticket_id: i32,
    pub sender_user_id: u64,
    pub sender_username: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl TicketMessage {
    pub fn from_entity(entity: entity::ticket_message::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            ticket_id: entity.ticket_id,
            sender_user_id: parse_u64_from_string(entity.sender_user_id)?,
            sender_username: entity.sender_username,
            content: entity.content,
            timestamp: entity.timestamp,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateTicketMessageParam {
    pub ticket_id: i32,
    pub sender_user_id: u64,
    pub sender_username: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}
