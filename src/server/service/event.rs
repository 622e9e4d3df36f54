//! Event lifecycle operations behind the event slash commands and announcement buttons.

use sea_orm::DatabaseConnection;
use serenity::{
    all::{CreateAttachment, CreateMessage, UserId},
    http::Http,
};
use std::sync::Arc;

use crate::server::{
    data::{
        attendance::AttendanceRepository, schedule::ScheduleRepository,
        server_setting::ServerSettingRepository,
    },
    error::{
        command::{CommandError, LinkKind},
        AppError,
    },
    model::{
        attendance::CreateAttendanceParam,
        schedule::{CreateScheduleParam, EditEventParam, PostEventParam, Schedule},
        server_setting::UpsertServerSettingParam,
    },
    service::{
        event_message::{delete_announcement, edit_announcement, post_announcement},
        report::{build_report_rows, render_report_csv, REPORT_FILE_NAME},
        role,
    },
    util::validate::{
        end_from_duration, parse_event_start, parse_message_id, parse_report_date,
        resolve_link_edit, validate_link,
    },
};

/// Reply sent after an event was posted, edited or restarted.
pub const EVENT_DONE_REPLY: &str = "Here you go!";

/// Service for event announcements, sign-ups and reports.
pub struct EventService<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }

    async fn event_channel(&self, guild_id: u64) -> Result<u64, AppError> {
        ServerSettingRepository::new(self.db)
            .get_event_channel(guild_id)
            .await?
            .ok_or_else(|| CommandError::NoEventChannel.into())
    }

    async fn find_by_message(&self, guild_id: u64, message: &str) -> Result<Schedule, AppError> {
        let message_id = parse_message_id(message)?;
        ScheduleRepository::new(self.db)
            .get_by_message_id(guild_id, message_id)
            .await?
            .ok_or_else(|| CommandError::EventNotFound.into())
    }

    /// Re-renders the announcement with the current attendee count.
    pub async fn render(&self, schedule: &Schedule) -> Result<(), AppError> {
        let count = AttendanceRepository::new(self.db)
            .count_by_schedule(schedule.id)
            .await?;
        edit_announcement(&self.http, schedule, count).await
    }

    /// Validates input, creates the access role and row, then posts the announcement.
    ///
    /// Anything created before a failure is removed again.
    ///
    /// # Returns
    /// - `Ok(Schedule)` - Posted event with its message id
    /// - `Err(AppError::CommandErr)` - No event channel or invalid input
    /// - `Err(AppError)` - Discord or database failure after cleanup
    pub async fn post_event(
        &self,
        param: PostEventParam,
        role_prefix: &str,
    ) -> Result<Schedule, AppError> {
        let channel_id = self.event_channel(param.guild_id).await?;

        let start_time = parse_event_start(&param.start)?;
        let end_time = end_from_duration(start_time, param.duration_hours)?;
        let host_url = validate_link(LinkKind::HostUrl, &param.host_url)?;
        let world_link = param
            .world_link
            .filter(|link| !link.trim().is_empty())
            .map(|link| validate_link(LinkKind::WorldLink, &link))
            .transpose()?;
        let image_url = param
            .image_url
            .filter(|link| !link.trim().is_empty())
            .map(|link| validate_link(LinkKind::ImageLink, &link))
            .transpose()?;

        let role_id = role::create_next_event_role(&self.http, param.guild_id, role_prefix).await?;

        let repo = ScheduleRepository::new(self.db);
        let schedule = match repo
            .create(CreateScheduleParam {
                guild_id: param.guild_id,
                title: param.title,
                description: param.description,
                start_time,
                end_time,
                host: param.host,
                host_url,
                world_link,
                image_url,
                role_id,
            })
            .await
        {
            Ok(schedule) => schedule,
            Err(e) => {
                role::delete_event_role(&self.http, param.guild_id, role_id).await;
                return Err(e);
            }
        };

        let posted: Result<Schedule, AppError> = async {
            let message_id = post_announcement(&self.http, channel_id, &schedule, 0).await?;
            match repo
                .set_announcement(schedule.id, channel_id, message_id)
                .await
            {
                Ok(schedule) => Ok(schedule),
                Err(e) => {
                    delete_announcement(&self.http, channel_id, message_id).await;
                    Err(e)
                }
            }
        }
        .await;

        match posted {
            Ok(schedule) => {
                tracing::info!(
                    "Posted event {} ({}) in guild {}",
                    schedule.id,
                    schedule.title,
                    schedule.guild_id
                );
                Ok(schedule)
            }
            Err(e) => {
                role::delete_event_role(&self.http, schedule.guild_id, role_id).await;
                if let Err(cleanup) = repo.delete(schedule.id).await {
                    tracing::error!(
                        "Failed to remove event {} after posting failed: {}",
                        schedule.id,
                        cleanup
                    );
                }
                Err(e)
            }
        }
    }

    /// Applies the given edits, re-renders the announcement and persists.
    pub async fn edit_event(&self, param: EditEventParam) -> Result<Schedule, AppError> {
        let fallback_channel = self.event_channel(param.guild_id).await?;
        let existing = self.find_by_message(param.guild_id, &param.message).await?;

        let mut schedule = apply_edit(existing, &param)?;
        schedule.channel_id = schedule.channel_id.or(Some(fallback_channel));

        self.render(&schedule).await?;
        ScheduleRepository::new(self.db).update(&schedule).await
    }

    /// Reopens an event for sign-ups.
    ///
    /// Ended events get a fresh role since theirs was deleted; attendees on record are
    /// granted the role again.
    pub async fn restart_event(
        &self,
        guild_id: u64,
        message: &str,
        role_prefix: &str,
    ) -> Result<Schedule, AppError> {
        let fallback_channel = self.event_channel(guild_id).await?;
        let mut schedule = self.find_by_message(guild_id, message).await?;

        let new_role = if schedule.has_ended {
            let role_id = role::create_next_event_role(&self.http, guild_id, role_prefix).await?;
            schedule.role_id = role_id;
            Some(role_id)
        } else {
            if !role::role_exists(&self.http, guild_id, schedule.role_id).await? {
                return Err(CommandError::RoleMissing.into());
            }
            None
        };

        schedule.is_active = false;
        schedule.has_ended = false;
        schedule.channel_id = schedule.channel_id.or(Some(fallback_channel));

        let restarted: Result<Schedule, AppError> = async {
            self.render(&schedule).await?;
            ScheduleRepository::new(self.db).update(&schedule).await
        }
        .await;

        let schedule = match restarted {
            Ok(schedule) => schedule,
            Err(e) => {
                if let Some(role_id) = new_role {
                    role::delete_event_role(&self.http, guild_id, role_id).await;
                }
                return Err(e);
            }
        };

        let attendees = AttendanceRepository::new(self.db)
            .get_by_schedule(schedule.id)
            .await?;
        for attendee in attendees {
            if let Err(e) =
                role::grant_role(&self.http, guild_id, attendee.user_id, schedule.role_id).await
            {
                tracing::warn!(
                    "Failed to grant role {} to {} for event {}: {}",
                    schedule.role_id,
                    attendee.user_id,
                    schedule.id,
                    e
                );
            }
        }

        Ok(schedule)
    }

    /// Re-renders every unended announcement in the guild.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of announcements refreshed
    pub async fn refresh_events(&self, guild_id: u64) -> Result<usize, AppError> {
        ServerSettingRepository::new(self.db)
            .get_event_channel(guild_id)
            .await?
            .ok_or(CommandError::NoChannelForRefresh)?;

        let schedules = ScheduleRepository::new(self.db)
            .get_unended_by_guild(guild_id)
            .await?;

        let mut refreshed = 0;
        for schedule in &schedules {
            match self.render(schedule).await {
                Ok(()) => refreshed += 1,
                Err(e) => tracing::warn!("Failed to refresh event {}: {}", schedule.id, e),
            }
        }

        Ok(refreshed)
    }

    /// Records a sign-up, grants the access role and re-renders.
    ///
    /// A new sign-up is removed again when the role cannot be granted.
    ///
    /// # Returns
    /// - `Ok(String)` - Ephemeral reply
    /// - `Err(AppError::CommandErr)` - Event missing or over
    pub async fn sign_up(
        &self,
        schedule_id: i32,
        user_id: u64,
        user_name: &str,
    ) -> Result<String, AppError> {
        let schedule = ScheduleRepository::new(self.db)
            .get_by_id(schedule_id)
            .await?
            .ok_or(CommandError::EventNotFound)?;

        if schedule.has_ended {
            return Err(CommandError::EventEnded(schedule.title).into());
        }

        let attendance = AttendanceRepository::new(self.db);
        let (_, created) = attendance
            .sign_up(CreateAttendanceParam {
                schedule_id,
                user_id,
                user_name: user_name.to_string(),
            })
            .await?;

        if let Err(e) =
            role::grant_role(&self.http, schedule.guild_id, user_id, schedule.role_id).await
        {
            if created {
                attendance.withdraw(schedule_id, user_id).await?;
            }
            return Err(e);
        }

        // Repeat presses re-render too.
        self.render(&schedule).await?;

        if created {
            Ok(format!("You are signed up for **{}**.", schedule.title))
        } else {
            Ok(format!(
                "You are already signed up for **{}**.",
                schedule.title
            ))
        }
    }

    /// Removes a sign-up and the access role, then re-renders.
    pub async fn withdraw(&self, schedule_id: i32, user_id: u64) -> Result<String, AppError> {
        let schedule = ScheduleRepository::new(self.db)
            .get_by_id(schedule_id)
            .await?
            .ok_or(CommandError::EventNotFound)?;

        let removed = AttendanceRepository::new(self.db)
            .withdraw(schedule_id, user_id)
            .await?;
        if !removed {
            return Ok(format!("You are not signed up for **{}**.", schedule.title));
        }

        if !schedule.has_ended {
            role::revoke_role(&self.http, schedule.guild_id, user_id, schedule.role_id).await?;
        }

        self.render(&schedule).await?;
        Ok(format!(
            "You are no longer signed up for **{}**.",
            schedule.title
        ))
    }

    /// Builds the attendance CSV for ended events in the range and DMs it to `user_id`.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of events in the report
    /// - `Err(AppError::CommandErr)` - A date could not be parsed
    pub async fn send_attendance_report(
        &self,
        guild_id: u64,
        user_id: u64,
        start_date: &str,
        end_date: &str,
    ) -> Result<usize, AppError> {
        let from = parse_report_date(start_date, false)?;
        let to = parse_report_date(end_date, true)?;

        let events = ScheduleRepository::new(self.db)
            .get_ended_with_attendees(guild_id, from, to)
            .await?;

        let dm = UserId::new(user_id).create_dm_channel(&self.http).await?;

        let message = if events.is_empty() {
            CreateMessage::new().content("There are no events in that time range")
        } else {
            let csv = render_report_csv(&build_report_rows(&events))?;
            CreateMessage::new()
                .content(EVENT_DONE_REPLY)
                .add_file(CreateAttachment::bytes(csv, REPORT_FILE_NAME))
        };
        dm.id.send_message(&self.http, message).await?;

        Ok(events.len())
    }

    pub async fn set_event_channel(
        &self,
        guild_id: u64,
        channel_id: u64,
    ) -> Result<String, AppError> {
        ServerSettingRepository::new(self.db)
            .upsert(UpsertServerSettingParam {
                guild_id,
                channel_id,
            })
            .await?;

        Ok(format!("Now posting events in <#{}>", channel_id))
    }
}

/// Applies an edit to an event without touching Discord or the database.
///
/// A new start without a duration keeps the previous duration. A duration of zero
/// counts as not given.
pub fn apply_edit(
    mut schedule: Schedule,
    param: &EditEventParam,
) -> Result<Schedule, CommandError> {
    if let Some(title) = &param.title {
        schedule.title = title.clone();
    }
    if let Some(description) = &param.description {
        schedule.description = description.clone();
    }

    let previous_duration = schedule.duration();
    if let Some(start) = &param.start {
        schedule.start_time = parse_event_start(start)?;
    }
    match param.duration_hours.filter(|hours| *hours != 0.0) {
        Some(hours) => schedule.end_time = end_from_duration(schedule.start_time, hours)?,
        None if param.start.is_some() => {
            schedule.end_time = schedule
                .start_time
                .checked_add_signed(previous_duration)
                .ok_or(CommandError::InvalidEndTime)?;
        }
        None => {}
    }

    if let Some(host) = &param.host {
        schedule.host = host.clone();
    }
    if let Some(host_url) = &param.host_url {
        schedule.host_url = validate_link(LinkKind::HostUrl, host_url)?;
    }
    if let Some(world_link) = &param.world_link {
        schedule.world_link = resolve_link_edit(LinkKind::WorldLink, world_link)?;
    }
    if let Some(image_url) = &param.image_url {
        schedule.image_url = resolve_link_edit(LinkKind::ImageLink, image_url)?;
    }

    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::schedule::EventHost;
    use chrono::{Duration, TimeZone, Utc};
    use test_utils::{
        builder::TestBuilder,
        factory::{attendance::AttendanceFactory, schedule::ScheduleFactory},
    };

    fn schedule() -> Schedule {
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 18, 0, 0).unwrap();
        Schedule {
            id: 1,
            message_id: Some(900),
            channel_id: Some(200),
            guild_id: 100,
            title: "Movie Night".to_string(),
            description: "Popcorn".to_string(),
            start_time: start,
            end_time: start + Duration::hours(3),
            host: Some(EventHost {
                user_id: 42,
                name: "Host".to_string(),
            }),
            host_url: "https://vrchat.com/home/user/usr_42".to_string(),
            world_link: Some("https://vrchat.com/home/world/wrld_1".to_string()),
            image_url: None,
            role_id: 700,
            is_active: false,
            has_ended: false,
            created_at: start,
        }
    }

    #[test]
    fn new_start_keeps_duration() {
        let param = EditEventParam {
            start: Some("2025-06-02 20:00".to_string()),
            ..Default::default()
        };

        let edited = apply_edit(schedule(), &param).unwrap();

        assert_eq!(
            edited.start_time,
            Utc.with_ymd_and_hms(2025, 6, 2, 20, 0, 0).unwrap()
        );
        assert_eq!(edited.duration(), Duration::hours(3));
    }

    #[test]
    fn duration_only_moves_end() {
        let param = EditEventParam {
            duration_hours: Some(1.5),
            ..Default::default()
        };

        let edited = apply_edit(schedule(), &param).unwrap();

        assert_eq!(edited.start_time, schedule().start_time);
        assert_eq!(edited.duration(), Duration::minutes(90));
    }

    #[test]
    fn zero_duration_is_ignored() {
        let param = EditEventParam {
            start: Some("2025-06-02 20:00".to_string()),
            duration_hours: Some(0.0),
            ..Default::default()
        };

        let edited = apply_edit(schedule(), &param).unwrap();

        assert_eq!(edited.duration(), Duration::hours(3));
        assert_eq!(
            apply_edit(
                schedule(),
                &EditEventParam {
                    duration_hours: Some(0.0),
                    ..Default::default()
                }
            )
            .unwrap()
            .end_time,
            schedule().end_time
        );
    }

    #[test]
    fn far_future_start_is_rejected_not_overflowed() {
        let param = EditEventParam {
            start: Some("<t:8210266876799:F>".to_string()),
            ..Default::default()
        };

        assert_eq!(
            apply_edit(schedule(), &param).unwrap_err(),
            CommandError::InvalidEndTime
        );
    }

    #[test]
    fn clear_removes_world_link() {
        let param = EditEventParam {
            world_link: Some("Clear".to_string()),
            ..Default::default()
        };

        let edited = apply_edit(schedule(), &param).unwrap();
        assert_eq!(edited.world_link, None);
    }

    #[test]
    fn bot_host_clears_host() {
        let param = EditEventParam {
            host: Some(None),
            ..Default::default()
        };

        let edited = apply_edit(schedule(), &param).unwrap();
        assert_eq!(edited.host, None);
    }

    #[test]
    fn rejects_invalid_inputs() {
        let bad_link = EditEventParam {
            image_url: Some("ftp://example.com/a.png".to_string()),
            ..Default::default()
        };
        assert_eq!(
            apply_edit(schedule(), &bad_link).unwrap_err(),
            CommandError::InvalidLink(LinkKind::ImageLink)
        );

        let bad_duration = EditEventParam {
            duration_hours: Some(-2.0),
            ..Default::default()
        };
        assert_eq!(
            apply_edit(schedule(), &bad_duration).unwrap_err(),
            CommandError::InvalidEndTime
        );

        let bad_start = EditEventParam {
            start: Some("tomorrow-ish".to_string()),
            ..Default::default()
        };
        assert_eq!(
            apply_edit(schedule(), &bad_start).unwrap_err(),
            CommandError::InvalidStartTime
        );
    }

    #[test]
    fn untouched_fields_are_kept() {
        let param = EditEventParam {
            title: Some("Game Night".to_string()),
            ..Default::default()
        };

        let edited = apply_edit(schedule(), &param).unwrap();

        assert_eq!(edited.title, "Game Night");
        assert_eq!(edited.description, "Popcorn");
        assert_eq!(edited.world_link, schedule().world_link);
        assert_eq!(edited.end_time, schedule().end_time);
    }

    /// Tests a sign-up whose role grant is refused by Discord.
    ///
    /// Expected: error returned and no attendance row left behind
    #[tokio::test]
    async fn failed_grant_removes_new_sign_up() -> Result<(), AppError> {
        let test = TestBuilder::new().with_event_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let schedule = ScheduleFactory::new(db, "100").message_id(None).build().await?;

        let service = EventService::new(db, Arc::new(Http::new("")));
        let result = service.sign_up(schedule.id, 42, "alice").await;

        assert!(result.is_err());
        assert_eq!(
            AttendanceRepository::new(db)
                .count_by_schedule(schedule.id)
                .await?,
            0
        );

        Ok(())
    }

    /// Tests a failed grant for a user who was already signed up.
    ///
    /// Expected: error returned and the existing row kept
    #[tokio::test]
    async fn failed_grant_keeps_existing_sign_up() -> Result<(), AppError> {
        let test = TestBuilder::new().with_event_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let schedule = ScheduleFactory::new(db, "100").message_id(None).build().await?;
        AttendanceFactory::new(db, schedule.id)
            .user("42", "alice")
            .build()
            .await?;

        let service = EventService::new(db, Arc::new(Http::new("")));
        let result = service.sign_up(schedule.id, 42, "alice").await;

        assert!(result.is_err());
        assert_eq!(
            AttendanceRepository::new(db)
                .count_by_schedule(schedule.id)
                .await?,
            1
        );

        Ok(())
    }

    /// Tests signing up for an event that is over.
    ///
    /// Expected: EventEnded error and no attendance row
    #[tokio::test]
    async fn sign_up_refused_after_end() -> Result<(), AppError> {
        let test = TestBuilder::new().with_event_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let schedule = ScheduleFactory::new(db, "100")
            .message_id(None)
            .has_ended(true)
            .build()
            .await?;

        let service = EventService::new(db, Arc::new(Http::new("")));
        let result = service.sign_up(schedule.id, 42, "alice").await;

        assert!(matches!(
            result,
            Err(AppError::CommandErr(CommandError::EventEnded(_)))
        ));
        assert_eq!(
            AttendanceRepository::new(db)
                .count_by_schedule(schedule.id)
                .await?,
            0
        );

        Ok(())
    }
}
