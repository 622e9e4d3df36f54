//! Bulk shifting of upcoming events after a daylight saving change.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serenity::http::Http;

use crate::server::{
    data::schedule::ScheduleRepository,
    error::{command::CommandError, AppError},
    model::schedule::Schedule,
    service::event::EventService,
};

const PREVIEW_SAMPLE_SIZE: usize = 5;
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const MAX_SHIFT_HOURS: i64 = 24;

/// Whether to only describe the shift or apply it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum DstMode {
    #[name = "preview"]
    Preview,
    #[name = "migrate"]
    Migrate,
}

/// Describes a shift, e.g. "forward by 1 hour" or "backward by 2 hours".
pub fn adjustment_description(hours: i64) -> Result<String, CommandError> {
    if hours == 0 {
        return Err(CommandError::ZeroHours);
    }
    if hours.abs() > MAX_SHIFT_HOURS {
        return Err(CommandError::HoursOutOfRange);
    }

    let magnitude = hours.abs();
    let direction = if hours > 0 { "forward" } else { "backward" };
    let unit = if magnitude == 1 { "hour" } else { "hours" };

    Ok(format!("{} by {} {}", direction, magnitude, unit))
}

fn shift_time(time: DateTime<Utc>, shift: Duration) -> Result<DateTime<Utc>, CommandError> {
    time.checked_add_signed(shift)
        .ok_or(CommandError::HoursOutOfRange)
}

/// Renders the preview text for shifting `events` by `hours`.
pub fn preview_report(events: &[Schedule], hours: i64) -> Result<String, CommandError> {
    let description = adjustment_description(hours)?;

    if events.is_empty() {
        return Ok("No future events found that would be affected by the migration.".to_string());
    }

    let shift = Duration::hours(hours);
    let mut output = format!(
        "📅 **DST Fix Preview** - {} events will be adjusted {}\n\n",
        events.len(),
        description
    );
    output.push_str(&format!(
        "The following events will be adjusted {}:\n\n",
        description
    ));

    for event in events.iter().take(PREVIEW_SAMPLE_SIZE) {
        output.push_str(&format!(
            "**{}**\n- Current start: {} UTC\n- New start: {} UTC\n- Current end: {} UTC\n- New end: {} UTC\n\n",
            event.title,
            event.start_time.format(TIME_FORMAT),
            shift_time(event.start_time, shift)?.format(TIME_FORMAT),
            event.end_time.format(TIME_FORMAT),
            shift_time(event.end_time, shift)?.format(TIME_FORMAT),
        ));
    }

    if events.len() > PREVIEW_SAMPLE_SIZE {
        output.push_str(&format!(
            "...and {} more events\n\n",
            events.len() - PREVIEW_SAMPLE_SIZE
        ));
    }

    output.push_str(
        "To apply these changes, run `/fixdsttimes migrate` with the same adjustment value.",
    );
    Ok(output)
}

pub struct DstService<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
}

impl<'a> DstService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }

    /// Events in the guild starting today (UTC) or later.
    async fn affected_events(&self, guild_id: u64) -> Result<Vec<Schedule>, AppError> {
        let midnight = Utc::now()
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc())
            .ok_or_else(|| AppError::InternalError("Invalid UTC midnight".to_string()))?;

        ScheduleRepository::new(self.db)
            .get_starting_from(guild_id, midnight)
            .await
    }

    /// Runs the preview or the migration and returns the reply text.
    pub async fn run(&self, guild_id: u64, mode: DstMode, hours: i64) -> Result<String, AppError> {
        let description = adjustment_description(hours)?;
        let events = self.affected_events(guild_id).await?;

        match mode {
            DstMode::Preview => Ok(preview_report(&events, hours)?),
            DstMode::Migrate => {
                let count = self.migrate(events, hours).await?;
                Ok(format!(
                    "Adjusted {} events {}.",
                    count, description
                ))
            }
        }
    }

    /// Shifts every event in one transaction, then re-renders unended announcements.
    async fn migrate(&self, events: Vec<Schedule>, hours: i64) -> Result<usize, AppError> {
        let shift = Duration::hours(hours);
        let txn = self.db.begin().await?;
        let repo = ScheduleRepository::new(&txn);

        let mut shifted = Vec::with_capacity(events.len());
        for mut event in events {
            event.start_time = shift_time(event.start_time, shift)?;
            event.end_time = shift_time(event.end_time, shift)?;
            shifted.push(repo.update(&event).await?);
        }
        txn.commit().await?;

        tracing::info!("Shifted {} events by {} hours", shifted.len(), hours);

        let event_service = EventService::new(self.db, self.http.clone());
        for event in shifted.iter().filter(|event| !event.has_ended) {
            if let Err(e) = event_service.render(event).await {
                tracing::warn!("Failed to re-render event {} after shift: {}", event.id, e);
            }
        }

        Ok(shifted.len())
    }
}
