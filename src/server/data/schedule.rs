use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::{
    error::AppError,
    model::{
        attendance::Attendance,
        schedule::{CreateScheduleParam, Schedule, ScheduleFilter},
    },
};

/// Repository for scheduled events.
///
/// Generic over the connection so the bulk import can run it inside a transaction.
pub struct ScheduleRepository<'a, C: ConnectionTrait = DatabaseConnection> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ScheduleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new event that has not been announced yet.
    ///
    /// # Returns
    /// - `Ok(Schedule)`: The created event
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, param: CreateScheduleParam) -> Result<Schedule, AppError> {
        let (host_id, host_name) = match param.host {
            Some(host) => (Some(host.user_id.to_string()), Some(host.name)),
            None => (None, None),
        };

        let entity = entity::schedule::ActiveModel {
            message_id: ActiveValue::Set(None),
            channel_id: ActiveValue::Set(None),
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            start_time: ActiveValue::Set(param.start_time),
            end_time: ActiveValue::Set(param.end_time),
            host_id: ActiveValue::Set(host_id),
            host_name: ActiveValue::Set(host_name),
            host_url: ActiveValue::Set(param.host_url),
            world_link: ActiveValue::Set(param.world_link),
            image_url: ActiveValue::Set(param.image_url),
            role_id: ActiveValue::Set(param.role_id.to_string()),
            is_active: ActiveValue::Set(false),
            has_ended: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Schedule::from_entity(entity)
    }

    /// Records where the announcement for an event was posted.
    pub async fn set_announcement(
        &self,
        id: i32,
        channel_id: u64,
        message_id: u64,
    ) -> Result<Schedule, AppError> {
        let entity = entity::schedule::ActiveModel {
            id: ActiveValue::Unchanged(id),
            channel_id: ActiveValue::Set(Some(channel_id.to_string())),
            message_id: ActiveValue::Set(Some(message_id.to_string())),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Schedule::from_entity(entity)
    }

    /// Writes every mutable field of `schedule` back to the database.
    pub async fn update(&self, schedule: &Schedule) -> Result<Schedule, AppError> {
        let (host_id, host_name) = match &schedule.host {
            Some(host) => (Some(host.user_id.to_string()), Some(host.name.clone())),
            None => (None, None),
        };

        let entity = entity::schedule::ActiveModel {
            id: ActiveValue::Unchanged(schedule.id),
            message_id: ActiveValue::Set(schedule.message_id.map(|id| id.to_string())),
            channel_id: ActiveValue::Set(schedule.channel_id.map(|id| id.to_string())),
            guild_id: ActiveValue::Set(schedule.guild_id.to_string()),
            title: ActiveValue::Set(schedule.title.clone()),
            description: ActiveValue::Set(schedule.description.clone()),
            start_time: ActiveValue::Set(schedule.start_time),
            end_time: ActiveValue::Set(schedule.end_time),
            host_id: ActiveValue::Set(host_id),
            host_name: ActiveValue::Set(host_name),
            host_url: ActiveValue::Set(schedule.host_url.clone()),
            world_link: ActiveValue::Set(schedule.world_link.clone()),
            image_url: ActiveValue::Set(schedule.image_url.clone()),
            role_id: ActiveValue::Set(schedule.role_id.to_string()),
            is_active: ActiveValue::Set(schedule.is_active),
            has_ended: ActiveValue::Set(schedule.has_ended),
            created_at: ActiveValue::Unchanged(schedule.created_at),
        }
        .update(self.db)
        .await?;

        Schedule::from_entity(entity)
    }

    /// Deletes an event and, through the cascade, its attendance.
    ///
    /// # Returns
    /// - `Ok(u64)`: Number of rows deleted
    pub async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let result = entity::prelude::Schedule::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Schedule>, AppError> {
        entity::prelude::Schedule::find_by_id(id)
            .one(self.db)
            .await?
            .map(Schedule::from_entity)
            .transpose()
    }

    /// Finds an event by its announcement message within a guild.
    pub async fn get_by_message_id(
        &self,
        guild_id: u64,
        message_id: u64,
    ) -> Result<Option<Schedule>, AppError> {
        entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::schedule::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await?
            .map(Schedule::from_entity)
            .transpose()
    }

    /// Gets all events in a guild that have not ended, soonest first.
    pub async fn get_unended_by_guild(&self, guild_id: u64) -> Result<Vec<Schedule>, AppError> {
        let entities = entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::schedule::Column::HasEnded.eq(false))
            .order_by_asc(entity::schedule::Column::StartTime)
            .all(self.db)
            .await?;

        entities.into_iter().map(Schedule::from_entity).collect()
    }

    /// Gets events in a guild starting at or after `from`, soonest first.
    pub async fn get_starting_from(
        &self,
        guild_id: u64,
        from: DateTime<Utc>,
    ) -> Result<Vec<Schedule>, AppError> {
        let entities = entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::schedule::Column::StartTime.gte(from))
            .order_by_asc(entity::schedule::Column::StartTime)
            .all(self.db)
            .await?;

        entities.into_iter().map(Schedule::from_entity).collect()
    }

    /// Events whose start has passed but which are not yet marked active or ended.
    pub async fn get_due_to_start(&self, now: DateTime<Utc>) -> Result<Vec<Schedule>, AppError> {
        let entities = entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::HasEnded.eq(false))
            .filter(entity::schedule::Column::IsActive.eq(false))
            .filter(entity::schedule::Column::StartTime.lte(now))
            .filter(entity::schedule::Column::EndTime.gt(now))
            .all(self.db)
            .await?;

        entities.into_iter().map(Schedule::from_entity).collect()
    }

    /// Events whose end has passed but which are not yet marked ended.
    pub async fn get_due_to_end(&self, now: DateTime<Utc>) -> Result<Vec<Schedule>, AppError> {
        let entities = entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::HasEnded.eq(false))
            .filter(entity::schedule::Column::EndTime.lte(now))
            .all(self.db)
            .await?;

        entities.into_iter().map(Schedule::from_entity).collect()
    }

    /// Gets ended events in a guild within a date range, with their attendees.
    ///
    /// An event qualifies when `start >= from` and `end <= to`.
    pub async fn get_ended_with_attendees(
        &self,
        guild_id: u64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<(Schedule, Vec<Attendance>)>, AppError> {
        let rows = entity::prelude::Schedule::find()
            .filter(entity::schedule::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::schedule::Column::HasEnded.eq(true))
            .filter(entity::schedule::Column::StartTime.gte(from))
            .filter(entity::schedule::Column::EndTime.lte(to))
            .order_by_asc(entity::schedule::Column::StartTime)
            .find_with_related(entity::prelude::Attendance)
            .all(self.db)
            .await?;

        rows.into_iter()
            .map(|(schedule, attendees)| {
                let attendees = attendees
                    .into_iter()
                    .map(Attendance::from_entity)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok((Schedule::from_entity(schedule)?, attendees))
            })
            .collect()
    }

    /// Gets one page of events matching `filter`, ordered by start time.
    ///
    /// # Arguments
    /// - `filter`: Optional constraints
    /// - `page`: Zero-indexed page number
    /// - `per_page`: Number of events per page
    ///
    /// # Returns
    /// - `Ok((Vec<Schedule>, u64))`: Events on the page and total matching events
    pub async fn get_paginated(
        &self,
        filter: &ScheduleFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Schedule>, u64), AppError> {
        let paginator = Self::filtered(filter)
            .order_by_asc(entity::schedule::Column::StartTime)
            .order_by_asc(entity::schedule::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        let schedules = entities
            .into_iter()
            .map(Schedule::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((schedules, total))
    }

    fn filtered(filter: &ScheduleFilter) -> Select<entity::prelude::Schedule> {
        let mut query = entity::prelude::Schedule::find();

        if let Some(guild_id) = filter.guild_id {
            query = query.filter(entity::schedule::Column::GuildId.eq(guild_id.to_string()));
        }
        if let Some(start_from) = filter.start_from {
            query = query.filter(entity::schedule::Column::StartTime.gte(start_from));
        }
        if let Some(end_until) = filter.end_until {
            query = query.filter(entity::schedule::Column::EndTime.lte(end_until));
        }
        if let Some(is_active) = filter.is_active {
            query = query.filter(entity::schedule::Column::IsActive.eq(is_active));
        }
        if let Some(has_ended) = filter.has_ended {
            query = query.filter(entity::schedule::Column::HasEnded.eq(has_ended));
        }

        query
    }
}
