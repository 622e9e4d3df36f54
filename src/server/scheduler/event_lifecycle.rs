use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::schedule::ScheduleRepository,
    error::AppError,
    model::schedule::Schedule,
    service::{event::EventService, role},
};

/// Starts the event lifecycle scheduler
///
/// This scheduler runs every minute and:
/// - Marks events whose start has passed as active
/// - Marks events whose end has passed as ended and deletes their access role
///
/// Affected announcements are re-rendered so their status and buttons stay current.
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client for role deletion and message edits
pub async fn start_scheduler(db: DatabaseConnection, discord_http: Arc<Http>) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_http = discord_http.clone();

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let http = job_http.clone();

        Box::pin(async move {
            process_event_lifecycle(&db, http).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Event lifecycle scheduler started");

    Ok(())
}

async fn process_event_lifecycle(db: &DatabaseConnection, discord_http: Arc<Http>) {
    let now = Utc::now();
    let service = EventService::new(db, discord_http.clone());

    match mark_started(db, now).await {
        Ok(started) => {
            for schedule in &started {
                tracing::info!("Event {} ({}) is now live", schedule.id, schedule.title);
                if let Err(e) = service.render(schedule).await {
                    tracing::error!("Failed to render started event {}: {}", schedule.id, e);
                }
            }
        }
        Err(e) => tracing::error!("Error starting due events: {}", e),
    }

    match mark_ended(db, now).await {
        Ok(ended) => {
            for schedule in &ended {
                tracing::info!("Event {} ({}) has ended", schedule.id, schedule.title);
                role::delete_event_role(&discord_http, schedule.guild_id, schedule.role_id).await;
                if let Err(e) = service.render(schedule).await {
                    tracing::error!("Failed to render ended event {}: {}", schedule.id, e);
                }
            }
        }
        Err(e) => tracing::error!("Error ending due events: {}", e),
    }
}

/// Flags events that should be running as active.
///
/// Failures on single events are logged and skipped.
///
/// # Returns
/// - `Ok(Vec<Schedule>)`: Events that were flipped to active
/// - `Err(AppError)`: The due events could not be queried
pub async fn mark_started(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
) -> Result<Vec<Schedule>, AppError> {
    let repo = ScheduleRepository::new(db);
    let due = repo.get_due_to_start(now).await?;

    let mut started = Vec::with_capacity(due.len());
    for mut schedule in due {
        schedule.is_active = true;
        match repo.update(&schedule).await {
            Ok(updated) => started.push(updated),
            Err(e) => tracing::error!("Failed to activate event {}: {}", schedule.id, e),
        }
    }

    Ok(started)
}

/// Flags events whose end has passed as ended and no longer active.
///
/// # Returns
/// - `Ok(Vec<Schedule>)`: Events that were flipped to ended
/// - `Err(AppError)`: The due events could not be queried
pub async fn mark_ended(
    db: &DatabaseConnection,
    now: DateTime<Utc>,
) -> Result<Vec<Schedule>, AppError> {
    let repo = ScheduleRepository::new(db);
    let due = repo.get_due_to_end(now).await?;

    let mut ended = Vec::with_capacity(due.len());
    for mut schedule in due {
        schedule.is_active = false;
        schedule.has_ended = true;
        match repo.update(&schedule).await {
            Ok(updated) => ended.push(updated),
            Err(e) => tracing::error!("Failed to end event {}: {}", schedule.id, e),
        }
    }

    Ok(ended)
}
