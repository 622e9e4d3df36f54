use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::server::{
    error::AppError,
    model::server_setting::{ServerSetting, UpsertServerSettingParam},
};

pub struct ServerSettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerSettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or updates the setting for a guild
    ///
    /// # Returns
    /// - `Ok(ServerSetting)`: The created or updated setting
    /// - `Err(AppError)`: Database error
    pub async fn upsert(&self, param: UpsertServerSettingParam) -> Result<ServerSetting, AppError> {
        let existing = entity::prelude::ServerSetting::find()
            .filter(entity::server_setting::Column::GuildId.eq(param.guild_id.to_string()))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(existing) => {
                let mut active: entity::server_setting::ActiveModel = existing.into();
                active.channel_id = ActiveValue::Set(Some(param.channel_id.to_string()));
                active.updated_at = ActiveValue::Set(Utc::now());
                active.update(self.db).await?
            }
            None => {
                entity::server_setting::ActiveModel {
                    guild_id: ActiveValue::Set(param.guild_id.to_string()),
                    channel_id: ActiveValue::Set(Some(param.channel_id.to_string())),
                    updated_at: ActiveValue::Set(Utc::now()),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        ServerSetting::from_entity(entity)
    }

    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Option<ServerSetting>, AppError> {
        entity::prelude::ServerSetting::find()
            .filter(entity::server_setting::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
            .map(ServerSetting::from_entity)
            .transpose()
    }

    /// Gets the configured event channel for a guild, if any.
    pub async fn get_event_channel(&self, guild_id: u64) -> Result<Option<u64>, AppError> {
        Ok(self
            .get_by_guild_id(guild_id)
            .await?
            .and_then(|setting| setting.channel_id))
    }
}
