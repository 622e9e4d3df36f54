//! Ticket factory for creating test tickets.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tickets with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let ticket = TicketFactory::new(&db, "100")
///     .ticket_type("IssueReport")
///     .thread_id(Some("555".to_string()))
///     .build()
///     .await?;
/// ```
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    ticket_type: String,
    creator_user_id: String,
    creator_username: String,
    thread_id: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    closed_at: Option<DateTime<Utc>>,
    closure_reason: Option<String>,
}

impl<'a> TicketFactory<'a> {
    /// Creates a new open `StaffApplication` ticket with a unique creator and thread.
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.into(),
            ticket_type: "StaffApplication".to_string(),
            creator_user_id: format!("{}", 400_000_000 + id),
            creator_username: format!("creator{}", id),
            thread_id: Some(format!("{}", 800_000_000 + id)),
            status: "open".to_string(),
            created_at: Utc::now(),
            closed_at: None,
            closure_reason: None,
        }
    }

    pub fn ticket_type(mut self, ticket_type: impl Into<String>) -> Self {
        self.ticket_type = ticket_type.into();
        self
    }

    pub fn creator(mut self, user_id: impl Into<String>, username: impl Into<String>) -> Self {
        self.creator_user_id = user_id.into();
        self.creator_username = username.into();
        self
    }

    pub fn thread_id(mut self, thread_id: Option<String>) -> Self {
        self.thread_id = thread_id;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Marks the ticket closed now with the given reason.
    pub fn closed(mut self, reason: Option<String>) -> Self {
        self.status = "closed".to_string();
        self.closed_at = Some(Utc::now());
        self.closure_reason = reason;
        self
    }

    /// Builds and inserts the ticket entity into the database.
    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        entity::ticket::ActiveModel {
            id: ActiveValue::NotSet,
            ticket_type: ActiveValue::Set(self.ticket_type),
            creator_user_id: ActiveValue::Set(self.creator_user_id),
            creator_username: ActiveValue::Set(self.creator_username),
            guild_id: ActiveValue::Set(self.guild_id),
            thread_id: ActiveValue::Set(self.thread_id),
            assigned_staff_user_id: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            closed_at: ActiveValue::Set(self.closed_at),
            closure_reason: ActiveValue::Set(self.closure_reason),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open ticket with default values in the specified guild.
pub async fn create_ticket(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db, guild_id).build().await
}
