//! Schedule factory for creating test event entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::schedule::ScheduleFactory;
///
/// let schedule = ScheduleFactory::new(&db, "100")
///     .title("Movie Night")
///     .start_time(Utc::now() - chrono::Duration::hours(1))
///     .build()
///     .await?;
/// ```
pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    message_id: Option<String>,
    channel_id: Option<String>,
    title: String,
    description: String,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    host_id: Option<String>,
    host_name: Option<String>,
    host_url: String,
    world_link: Option<String>,
    image_url: Option<String>,
    role_id: String,
    is_active: bool,
    has_ended: bool,
}

impl<'a> ScheduleFactory<'a> {
    /// Creates a new ScheduleFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Event {id}"`
    /// - message_id and role_id: unique values derived from the counter
    /// - start_time: 1 hour from now, end_time: 3 hours from now
    /// - host: `"Host {id}"` with a profile URL
    /// - not active, not ended
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            guild_id: guild_id.into(),
            message_id: Some(format!("{}", 900_000_000 + id)),
            channel_id: Some("200000000".to_string()),
            title: format!("Event {}", id),
            description: "Test event description".to_string(),
            start_time: now + chrono::Duration::hours(1),
            end_time: now + chrono::Duration::hours(3),
            host_id: Some(format!("{}", 500_000_000 + id)),
            host_name: Some(format!("Host {}", id)),
            host_url: format!("https://vrchat.com/home/user/usr_{}", id),
            world_link: None,
            image_url: None,
            role_id: format!("{}", 700_000_000 + id),
            is_active: false,
            has_ended: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn message_id(mut self, message_id: Option<String>) -> Self {
        self.message_id = message_id;
        self
    }

    pub fn channel_id(mut self, channel_id: Option<String>) -> Self {
        self.channel_id = channel_id;
        self
    }

    pub fn role_id(mut self, role_id: impl Into<String>) -> Self {
        self.role_id = role_id.into();
        self
    }

    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self
    }

    pub fn end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = end_time;
        self
    }

    /// Sets the host; `None` for an event without a host.
    pub fn host(mut self, host_id: Option<String>, host_name: Option<String>) -> Self {
        self.host_id = host_id;
        self.host_name = host_name;
        self
    }

    pub fn world_link(mut self, world_link: Option<String>) -> Self {
        self.world_link = world_link;
        self
    }

    pub fn image_url(mut self, image_url: Option<String>) -> Self {
        self.image_url = image_url;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn has_ended(mut self, has_ended: bool) -> Self {
        self.has_ended = has_ended;
        self
    }

    /// Builds and inserts the schedule entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::schedule::Model)` - Created schedule entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::schedule::Model, DbErr> {
        entity::schedule::ActiveModel {
            id: ActiveValue::NotSet,
            message_id: ActiveValue::Set(self.message_id),
            channel_id: ActiveValue::Set(self.channel_id),
            guild_id: ActiveValue::Set(self.guild_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            host_id: ActiveValue::Set(self.host_id),
            host_name: ActiveValue::Set(self.host_name),
            host_url: ActiveValue::Set(self.host_url),
            world_link: ActiveValue::Set(self.world_link),
            image_url: ActiveValue::Set(self.image_url),
            role_id: ActiveValue::Set(self.role_id),
            is_active: ActiveValue::Set(self.is_active),
            has_ended: ActiveValue::Set(self.has_ended),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values in the specified guild.
///
/// Shorthand for `ScheduleFactory::new(db, guild_id).build().await`.
pub async fn create_schedule(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::schedule::Model, DbErr> {
    ScheduleFactory::new(db, guild_id).build().await
}
