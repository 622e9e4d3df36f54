//! Server setting factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a server setting pointing `guild_id` at `channel_id`.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID
/// - `channel_id` - Event channel ID, or `None` for an unset channel
///
/// # Returns
/// - `Ok(entity::server_setting::Model)` - Created setting
/// - `Err(DbErr)` - Database error during insert
pub async fn create_server_setting(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    channel_id: Option<String>,
) -> Result<entity::server_setting::Model, DbErr> {
    entity::server_setting::ActiveModel {
        id: ActiveValue::NotSet,
        guild_id: ActiveValue::Set(guild_id.into()),
        channel_id: ActiveValue::Set(channel_id),
        updated_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
