//! Support ticket domain models.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};

use crate::server::{
    error::{internal::InternalError, AppError},
    util::parse::{parse_optional_u64, parse_u64_from_string},
};

/// What a ticket was opened for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum TicketType {
    #[name = "Staff Application"]
    StaffApplication,
    #[name = "Guru/Teacher Application"]
    GuruApplication,
    #[name = "Issue Report"]
    IssueReport,
}

impl TicketType {
    /// Stored and thread-name form.
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::StaffApplication => "StaffApplication",
            TicketType::GuruApplication => "GuruApplication",
            TicketType::IssueReport => "IssueReport",
        }
    }
}

impl fmt::Display for TicketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketType {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "StaffApplication" => Ok(TicketType::StaffApplication),
            "GuruApplication" => Ok(TicketType::GuruApplication),
            "IssueReport" => Ok(TicketType::IssueReport),
            other => Err(InternalError::UnknownStoredValue {
                column: "ticket_type",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::Closed => "closed",
        }
    }
}

impl FromStr for TicketStatus {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(TicketStatus::Open),
            "closed" => Ok(TicketStatus::Closed),
            other => Err(InternalError::UnknownStoredValue {
                column: "status",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub ticket_type: TicketType,
    pub creator_user_id: u64,
    pub creator_username: String,
    pub guild_id: u64,
    /// Private thread for the ticket; `None` until the thread exists.
    pub thread_id: Option<u64>,
    pub assigned_staff_user_id: Option<u64>,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub closure_reason: Option<String>,
}

impl Ticket {
    pub fn from_entity(entity: entity::ticket::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            ticket_type: entity.ticket_type.parse()?,
            creator_user_id: parse_u64_from_string(entity.creator_user_id)?,
            creator_username: entity.creator_username,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            thread_id: parse_optional_u64(entity.thread_id)?,
            assigned_staff_user_id: parse_optional_u64(entity.assigned_staff_user_id)?,
            status: entity.status.parse()?,
            created_at: entity.created_at,
            closed_at: entity.closed_at,
            closure_reason: entity.closure_reason,
        })
    }

    pub fn is_open(&self) -> bool {
        self.status == TicketStatus::Open
    }
}

#[derive(Debug, Clone)]
pub struct CreateTicketParam {
    pub guild_id: u64,
    pub ticket_type: TicketType,
    pub creator_user_id: u64,
    pub creator_username: String,
}
