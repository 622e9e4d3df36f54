//! Bulk import of events from a TeamUp calendar CSV export.
//!
//! Rows are parsed up front. Rows are inserted inside one database transaction while roles
//! and announcements are created on Discord; any failure rolls the transaction back and
//! removes everything created on Discord during the run.

use std::sync::{Arc, LazyLock};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::Regex;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;
use serenity::http::Http;

use crate::server::{
    data::{schedule::ScheduleRepository, server_setting::ServerSettingRepository},
    error::{command::CommandError, AppError},
    model::schedule::{CreateScheduleParam, Schedule},
    service::{
        event_message::{delete_announcement, post_announcement},
        role,
    },
    util::markdown::clean_import_description,
};

/// File name of the summary attachment.
pub const SUMMARY_FILE_NAME: &str = "ImportedEvents.txt";

static VRC_USER_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://vrchat\.com/home/user/usr_[0-9a-zA-Z-]{36}")
        .expect("user url pattern is valid")
});

static VRC_WORLD_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://vrchat\.com/home/world/wrld_[0-9a-zA-Z-]{36}")
        .expect("world url pattern is valid")
});

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %I:%M %p",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %I:%M:%S %p",
];

/// All-day rows leave the time columns empty.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// One row of a TeamUp export. Columns not listed here are ignored.
#[derive(Debug, Deserialize)]
pub struct TeamUpRow {
    #[serde(rename = "Subject")]
    pub subject: String,
    #[serde(rename = "Start Date")]
    pub start_date: String,
    #[serde(rename = "Start Time", default)]
    pub start_time: String,
    #[serde(rename = "End Date")]
    pub end_date: String,
    #[serde(rename = "End Time", default)]
    pub end_time: String,
    #[serde(rename = "Who", default)]
    pub who: String,
    #[serde(rename = "Location", default)]
    pub location: String,
    #[serde(rename = "Description", default)]
    pub description: String,
}

/// A parsed row ready to become an event.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedEvent {
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub host_url: String,
    pub world_link: Option<String>,
}

fn parse_local_datetime(
    date: &str,
    time: &str,
    offset: &FixedOffset,
) -> Option<DateTime<Utc>> {
    let date = date.trim();
    let time = time.trim();

    let naive = if time.is_empty() {
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
            .and_then(|day| day.and_hms_opt(0, 0, 0))
    } else {
        let text = format!("{} {}", date, time);
        DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(&text, format).ok())
    };

    naive
        .and_then(|naive| offset.from_local_datetime(&naive).single())
        .map(|dt| dt.with_timezone(&Utc))
}

/// Converts one export row. `row` is 1-based and used in error messages.
pub fn convert_row(
    row: usize,
    record: TeamUpRow,
    offset: &FixedOffset,
) -> Result<ImportedEvent, CommandError> {
    let invalid = |reason: &str| CommandError::InvalidImportRow {
        row,
        reason: reason.to_string(),
    };

    let start_time = parse_local_datetime(&record.start_date, &record.start_time, offset)
        .ok_or_else(|| invalid("unreadable start date or time"))?;
    let end_time = parse_local_datetime(&record.end_date, &record.end_time, offset)
        .ok_or_else(|| invalid("unreadable end date or time"))?;

    let host_url = VRC_USER_URL
        .find(&record.who)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    let world_link = VRC_WORLD_URL
        .find(&record.location)
        .map(|m| m.as_str().to_string());

    Ok(ImportedEvent {
        title: record.subject,
        description: clean_import_description(&record.description),
        start_time,
        end_time,
        host_url,
        world_link,
    })
}

/// Parses a whole export. Nothing is imported if any row is invalid.
pub fn parse_teamup_csv(
    data: &[u8],
    offset: &FixedOffset,
) -> Result<Vec<ImportedEvent>, AppError> {
    let mut reader = csv::Reader::from_reader(data);
    let mut events = Vec::new();

    for (index, record) in reader.deserialize::<TeamUpRow>().enumerate() {
        events.push(convert_row(index + 1, record?, offset)?);
    }

    Ok(events)
}

/// Renders the summary posted back to the importer, sorted by start.
pub fn compose_summary(schedules: &[Schedule], offset: &FixedOffset) -> String {
    let mut sorted: Vec<&Schedule> = schedules.iter().collect();
    sorted.sort_by_key(|schedule| schedule.start_time);

    sorted
        .iter()
        .enumerate()
        .map(|(index, schedule)| {
            let weekday = schedule.start_time.with_timezone(offset).format("%A");
            format!(
                "📅  {}.  {}: [**{}**]({}) on <t:{}:F>\n",
                index + 1,
                weekday,
                schedule.title,
                schedule.message_link().unwrap_or_default(),
                schedule.start_time.timestamp()
            )
        })
        .collect()
}

pub struct ImportService<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
    http_client: reqwest::Client,
}

/// Discord objects created during one import run.
#[derive(Default)]
struct CreatedOnDiscord {
    roles: Vec<u64>,
    announcements: Vec<(u64, u64)>,
}

impl<'a> ImportService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>, http_client: reqwest::Client) -> Self {
        Self {
            db,
            http,
            http_client,
        }
    }

    /// Downloads and imports a TeamUp export, posting an announcement per event.
    ///
    /// # Arguments
    /// - `guild_id` - Guild to import into
    /// - `attachment_url` - URL of the uploaded CSV
    /// - `role_prefix` - Prefix for the per-event roles
    /// - `offset` - Fixed offset the export's times are in
    ///
    /// # Returns
    /// - `Ok(String)` - Summary text of the imported events
    /// - `Err(AppError)` - Nothing was imported
    pub async fn import(
        &self,
        guild_id: u64,
        attachment_url: &str,
        role_prefix: &str,
        offset: &FixedOffset,
    ) -> Result<String, AppError> {
        let channel_id = ServerSettingRepository::new(self.db)
            .get_event_channel(guild_id)
            .await?
            .ok_or(CommandError::NoEventChannel)?;

        let data = self
            .http_client
            .get(attachment_url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        let events = parse_teamup_csv(&data, offset)?;

        let txn = self.db.begin().await?;
        let mut created = CreatedOnDiscord::default();

        let result = self
            .import_all(&txn, guild_id, channel_id, role_prefix, events, &mut created)
            .await;

        let schedules = match result {
            Ok(schedules) => match txn.commit().await {
                Ok(()) => schedules,
                Err(e) => {
                    self.cleanup(guild_id, created).await;
                    return Err(e.into());
                }
            },
            Err(e) => {
                if let Err(rollback) = txn.rollback().await {
                    tracing::error!("Failed to roll back import transaction: {}", rollback);
                }
                self.cleanup(guild_id, created).await;
                return Err(e);
            }
        };

        tracing::info!(
            "Imported {} events into guild {}",
            schedules.len(),
            guild_id
        );

        Ok(compose_summary(&schedules, offset))
    }

    async fn import_all(
        &self,
        txn: &sea_orm::DatabaseTransaction,
        guild_id: u64,
        channel_id: u64,
        role_prefix: &str,
        events: Vec<ImportedEvent>,
        created: &mut CreatedOnDiscord,
    ) -> Result<Vec<Schedule>, AppError> {
        let repo = ScheduleRepository::new(txn);
        let mut taken = role::guild_role_names(&self.http, guild_id).await?;
        let mut schedules = Vec::with_capacity(events.len());

        for event in events {
            let role_name = role::next_event_role_name(role_prefix, &taken);
            let role_id = role::create_event_role(&self.http, guild_id, &role_name).await?;
            taken.insert(role_name);
            created.roles.push(role_id);

            let schedule = repo
                .create(CreateScheduleParam {
                    guild_id,
                    title: event.title,
                    description: event.description,
                    start_time: event.start_time,
                    end_time: event.end_time,
                    host: None,
                    host_url: event.host_url,
                    world_link: event.world_link,
                    image_url: None,
                    role_id,
                })
                .await?;

            let message_id = post_announcement(&self.http, channel_id, &schedule, 0).await?;
            created.announcements.push((channel_id, message_id));

            schedules.push(
                repo.set_announcement(schedule.id, channel_id, message_id)
                    .await?,
            );
        }

        Ok(schedules)
    }

    async fn cleanup(&self, guild_id: u64, created: CreatedOnDiscord) {
        tracing::warn!(
            "Import into guild {} failed; removing {} roles and {} announcements",
            guild_id,
            created.roles.len(),
            created.announcements.len()
        );

        for (channel_id, message_id) in created.announcements {
            delete_announcement(&self.http, channel_id, message_id).await;
        }
        for role_id in created.roles {
            role::delete_event_role(&self.http, guild_id, role_id).await;
        }
    }
}
