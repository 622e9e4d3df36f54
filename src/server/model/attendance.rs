//! Attendance domain models.

use chrono::{DateTime, Utc};

use crate::server::{error::AppError, util::parse::parse_u64_from_string};

/// A member signed up for an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Attendance {
    pub id: i32,
    pub schedule_id: i32,
    pub user_id: u64,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
}

impl Attendance {
    pub fn from_entity(entity: entity::attendance::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            schedule_id: entity.schedule_id,
            user_id: parse_u64_from_string(entity.user_id)?,
            user_name: entity.user_name,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for signing a member up for an event.
#[derive(Debug, Clone)]
pub struct CreateAttendanceParam {
    pub schedule_id: i32,
    pub user_id: u64,
    pub user_name: String,
}
