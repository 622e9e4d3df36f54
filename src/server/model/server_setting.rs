//! Per-server bot settings.

use chrono::{DateTime, Utc};

use crate::server::{
    error::AppError,
    util::parse::{parse_optional_u64, parse_u64_from_string},
};

#[derive(Debug, Clone, PartialEq)]
pub struct ServerSetting {
    pub id: i32,
    pub guild_id: u64,
    /// Channel event announcements are posted in.
    pub channel_id: Option<u64>,
    pub updated_at: DateTime<Utc>,
}

impl ServerSetting {
    pub fn from_entity(entity: entity::server_setting::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            channel_id: parse_optional_u64(entity.channel_id)?,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for creating or replacing a server's setting.
#[derive(Debug, Clone)]
pub struct UpsertServerSettingParam {
    pub guild_id: u64,
    pub channel_id: u64,
}
