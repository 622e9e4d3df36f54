//! Scheduled event domain models and parameters.

use chrono::{DateTime, Duration, Utc};

use crate::server::{
    error::AppError,
    util::parse::{parse_optional_u64, parse_u64_from_string},
};

/// The member hosting an event.
#[derive(Debug, Clone, PartialEq)]
pub struct EventHost {
    pub user_id: u64,
    pub name: String,
}

/// Where an event is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Live,
    Ended,
}

impl EventStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Live => "Live now",
            EventStatus::Ended => "Ended",
        }
    }
}

/// A scheduled community event with its announcement and access role.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub id: i32,
    /// Announcement message; `None` until posted.
    pub message_id: Option<u64>,
    /// Channel holding the announcement.
    pub channel_id: Option<u64>,
    pub guild_id: u64,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub host: Option<EventHost>,
    /// Host profile link; empty for imported events without one.
    pub host_url: String,
    pub world_link: Option<String>,
    pub image_url: Option<String>,
    /// Role granted to attendees while the event is not over.
    pub role_id: u64,
    pub is_active: bool,
    pub has_ended: bool,
    pub created_at: DateTime<Utc>,
}

impl Schedule {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Schedule)` - Converted model
    /// - `Err(AppError::InternalErr)` - A stored snowflake is not numeric
    pub fn from_entity(entity: entity::schedule::Model) -> Result<Self, AppError> {
        let host = match (parse_optional_u64(entity.host_id)?, entity.host_name) {
            (Some(user_id), Some(name)) => Some(EventHost { user_id, name }),
            (Some(user_id), None) => Some(EventHost {
                user_id,
                name: String::new(),
            }),
            _ => None,
        };

        Ok(Self {
            id: entity.id,
            message_id: parse_optional_u64(entity.message_id)?,
            channel_id: parse_optional_u64(entity.channel_id)?,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            title: entity.title,
            description: entity.description,
            start_time: entity.start_time,
            end_time: entity.end_time,
            host,
            host_url: entity.host_url,
            world_link: entity.world_link,
            image_url: entity.image_url,
            role_id: parse_u64_from_string(entity.role_id)?,
            is_active: entity.is_active,
            has_ended: entity.has_ended,
            created_at: entity.created_at,
        })
    }

    pub fn status(&self) -> EventStatus {
        if self.has_ended {
            EventStatus::Ended
        } else if self.is_active {
            EventStatus::Live
        } else {
            EventStatus::Upcoming
        }
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Converts domain model to DTO for API responses.
    pub fn into_dto(self) -> crate::model::event::EventDto {
        crate::model::event::EventDto {
            id: self.id,
            event_title: self.title,
            event_description: self.description,
            start_time: self.start_time,
            end_time: self.end_time,
            host_name: self.host.map(|host| host.name),
            world_link: self.world_link,
            image_url: self.image_url,
            is_active: self.is_active,
            has_ended: self.has_ended,
        }
    }

    /// Jump link to the announcement, when it has been posted.
    pub fn message_link(&self) -> Option<String> {
        match (self.channel_id, self.message_id) {
            (Some(channel_id), Some(message_id)) => Some(format!(
                "https://discord.com/channels/{}/{}/{}",
                self.guild_id, channel_id, message_id
            )),
            _ => None,
        }
    }
}

/// Parameters for inserting a new event.
#[derive(Debug, Clone)]
pub struct CreateScheduleParam {
    pub guild_id: u64,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub host: Option<EventHost>,
    pub host_url: String,
    pub world_link: Option<String>,
    pub image_url: Option<String>,
    pub role_id: u64,
}

/// Filters for listing events. Unset fields do not constrain the query.
#[derive(Debug, Clone, Default)]
pub struct ScheduleFilter {
    pub guild_id: Option<u64>,
    /// Only events starting at or after this instant.
    pub start_from: Option<DateTime<Utc>>,
    /// Only events ending at or before this instant.
    pub end_until: Option<DateTime<Utc>>,
    pub is_active: Option<bool>,
    pub has_ended: Option<bool>,
}

/// One page of events with totals.
#[derive(Debug, Clone)]
pub struct PaginatedSchedules {
    pub schedules: Vec<Schedule>,
    /// 1-based page number.
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginatedSchedules {
    pub fn into_dto(self) -> crate::model::event::PaginatedEventsDto {
        crate::model::event::PaginatedEventsDto {
            pagination: crate::model::event::PaginationDto {
                current_page: self.page,
                page_size: self.per_page,
                total_items: self.total,
                total_pages: self.total_pages,
            },
            events: self.schedules.into_iter().map(Schedule::into_dto).collect(),
        }
    }
}

/// Raw input of the post-event command.
#[derive(Debug, Clone)]
pub struct PostEventParam {
    pub guild_id: u64,
    pub title: String,
    pub description: String,
    /// Discord timecode or date text
    pub start: String,
    pub duration_hours: f64,
    /// `None` when no host was given or the host is a bot.
    pub host: Option<EventHost>,
    pub host_url: String,
    pub world_link: Option<String>,
    pub image_url: Option<String>,
}

/// Raw input of the edit command. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct EditEventParam {
    pub guild_id: u64,
    /// Message id or jump link of the announcement
    pub message: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub start: Option<String>,
    pub duration_hours: Option<f64>,
    /// `Some(None)` clears the host.
    pub host: Option<Option<EventHost>>,
    pub host_url: Option<String>,
    /// `clear` removes the link.
    pub world_link: Option<String>,
    /// `clear` removes the image.
    pub image_url: Option<String>,
}
