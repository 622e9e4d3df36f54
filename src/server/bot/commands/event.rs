//! Event management commands, limited to members with MANAGE_MESSAGES.

use poise::CreateReply;
use serenity::all::{Attachment, Channel, CreateAttachment, User};

use crate::server::{
    error::{command::CommandError, AppError, GENERIC_COMMAND_FAILURE},
    model::schedule::{EditEventParam, EventHost, PostEventParam},
    service::{
        dst::{DstMode, DstService},
        event::{EventService, EVENT_DONE_REPLY},
        import::{ImportService, SUMMARY_FILE_NAME},
    },
};

use super::{guild_id, reply, reply_error, reply_outcome, Context};

const POST_FAILURE: &str = "There was an error making your event.";
const EDIT_FAILURE: &str = "There was an error updating your event.";
const RESTART_FAILURE: &str = "There was an error restarting your event.";
const IMPORT_FAILURE: &str = "There was an error making your event. Ensure your description is not too long (1024 chars max for the whole embed).";

/// Bots cannot host; picking the bot means "no host".
fn host_from_user(user: &User) -> Option<EventHost> {
    (!user.bot).then(|| EventHost {
        user_id: user.id.get(),
        name: user.name.clone(),
    })
}

fn event_service(ctx: Context<'_>) -> EventService<'_> {
    EventService::new(&ctx.data().db, ctx.serenity_context().http.clone())
}

/// Post Event.
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_MESSAGES",
    default_member_permissions = "MANAGE_MESSAGES"
)]
pub async fn event(
    ctx: Context<'_>,
    #[description = "Name of the event"] name: String,
    #[description = "Event details"] description: String,
    #[description = "When the event occurs"] event_start: String,
    #[description = "How many hours till this event ends?"] duration: f64,
    #[description = "VRC profile of the user hosting the event"] profile_url: String,
    #[description = "Link to world"] world: Option<String>,
    #[description = "User hosting the event"] host: Option<User>,
    #[description = "Image URL"] image_url: Option<String>,
) -> Result<(), AppError> {
    ctx.defer_ephemeral().await?;
    let guild_id = guild_id(ctx)?;

    let param = PostEventParam {
        guild_id,
        title: name,
        description,
        start: event_start,
        duration_hours: duration,
        host: host.as_ref().and_then(host_from_user),
        host_url: profile_url,
        world_link: world,
        image_url,
    };

    let outcome = event_service(ctx)
        .post_event(param, &ctx.data().event_role_prefix)
        .await
        .map(|_| EVENT_DONE_REPLY.to_string());

    reply_outcome(ctx, outcome, POST_FAILURE).await
}

/// Edit Event.
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_MESSAGES",
    default_member_permissions = "MANAGE_MESSAGES"
)]
pub async fn edit(
    ctx: Context<'_>,
    #[description = "Message ID or link of the event"] event_id: String,
    #[description = "Name of the event"] name: Option<String>,
    #[description = "Event details"] description: Option<String>,
    #[description = "When the event occurs"] event_start: Option<String>,
    #[description = "How many hours till this event ends?"] duration: Option<f64>,
    #[description = "User hosting the event. Tag the bot to clear the host."] host: Option<User>,
    #[description = "VRC profile of the user hosting the event"] profile_url: Option<String>,
    #[description = "Link to world. Type 'clear' to remove link"] world: Option<String>,
    #[description = "Image URL. Type 'clear' to remove link"] image_url: Option<String>,
) -> Result<(), AppError> {
    ctx.defer_ephemeral().await?;
    let guild_id = guild_id(ctx)?;

    let param = EditEventParam {
        guild_id,
        message: event_id,
        title: name,
        description,
        start: event_start,
        duration_hours: duration,
        host: host.as_ref().map(host_from_user),
        host_url: profile_url,
        world_link: world,
        image_url,
    };

    let outcome = event_service(ctx)
        .edit_event(param)
        .await
        .map(|_| EVENT_DONE_REPLY.to_string());

    reply_outcome(ctx, outcome, EDIT_FAILURE).await
}

/// Restarts Event.
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_MESSAGES",
    default_member_permissions = "MANAGE_MESSAGES"
)]
pub async fn restartevent(
    ctx: Context<'_>,
    #[description = "Message ID or link of the event"] event_id: String,
) -> Result<(), AppError> {
    ctx.defer_ephemeral().await?;
    let guild_id = guild_id(ctx)?;

    let outcome = event_service(ctx)
        .restart_event(guild_id, &event_id, &ctx.data().event_role_prefix)
        .await
        .map(|_| EVENT_DONE_REPLY.to_string());

    reply_outcome(ctx, outcome, RESTART_FAILURE).await
}

/// Refreshes the announcements of events that haven't ended.
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_MESSAGES",
    default_member_permissions = "MANAGE_MESSAGES"
)]
pub async fn refresh(ctx: Context<'_>) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;
    reply(ctx, "Working on it!").await?;

    match event_service(ctx).refresh_events(guild_id).await {
        Ok(count) => reply(ctx, format!("Refreshed {} events.", count)).await,
        Err(e) => reply_error(ctx, e, GENERIC_COMMAND_FAILURE).await,
    }
}

/// Set Channel for Events.
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_MESSAGES",
    default_member_permissions = "MANAGE_MESSAGES"
)]
pub async fn seteventchannel(
    ctx: Context<'_>,
    #[description = "Channel for bot to post events"] channel: Channel,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;

    let outcome = event_service(ctx)
        .set_event_channel(guild_id, channel.id().get())
        .await;

    reply_outcome(ctx, outcome, GENERIC_COMMAND_FAILURE).await
}

/// Gets attendance report for a date range.
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_MESSAGES",
    default_member_permissions = "MANAGE_MESSAGES"
)]
pub async fn getattendancereport(
    ctx: Context<'_>,
    #[description = "Date to start the report"] start_date: String,
    #[description = "Date to end the report"] end_date: String,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;
    reply(ctx, "Getting your report. Hold tight...").await?;

    let outcome = event_service(ctx)
        .send_attendance_report(guild_id, ctx.author().id.get(), &start_date, &end_date)
        .await;

    match outcome {
        Ok(count) => {
            tracing::info!(
                "Sent attendance report covering {} events to {}",
                count,
                ctx.author().name
            );
            Ok(())
        }
        Err(e) => reply_error(ctx, e, GENERIC_COMMAND_FAILURE).await,
    }
}

/// Import events from a TeamUp CSV export.
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_MESSAGES",
    default_member_permissions = "MANAGE_MESSAGES"
)]
pub async fn importevents(
    ctx: Context<'_>,
    #[description = "CSV exported from TeamUp"] teamup_csv: Attachment,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;
    if !teamup_csv.filename.to_lowercase().ends_with(".csv") {
        return Err(CommandError::MissingImportFile.into());
    }
    ctx.defer_ephemeral().await?;

    let data = ctx.data();
    let service = ImportService::new(
        &data.db,
        ctx.serenity_context().http.clone(),
        data.http_client.clone(),
    );

    match service
        .import(
            guild_id,
            &teamup_csv.url,
            &data.event_role_prefix,
            &data.import_utc_offset,
        )
        .await
    {
        Ok(summary) => {
            let reply = CreateReply::default()
                .content(EVENT_DONE_REPLY)
                .attachment(CreateAttachment::bytes(summary.into_bytes(), SUMMARY_FILE_NAME))
                .ephemeral(true);
            ctx.send(reply).await?;
            Ok(())
        }
        Err(e) => reply_error(ctx, e, IMPORT_FAILURE).await,
    }
}

/// Shift upcoming events to account for a daylight saving change.
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_MESSAGES",
    default_member_permissions = "MANAGE_MESSAGES"
)]
pub async fn fixdsttimes(
    ctx: Context<'_>,
    #[description = "Preview the change or apply it"] mode: DstMode,
    #[description = "Hours to shift by, negative to move earlier"] hours: i64,
) -> Result<(), AppError> {
    ctx.defer_ephemeral().await?;
    let guild_id = guild_id(ctx)?;

    let outcome = DstService::new(&ctx.data().db, ctx.serenity_context().http.clone())
        .run(guild_id, mode, hours)
        .await;

    reply_outcome(ctx, outcome, GENERIC_COMMAND_FAILURE).await
}

/// Get Schedulebot Version.
#[poise::command(
    slash_command,
    required_permissions = "MANAGE_MESSAGES",
    default_member_permissions = "MANAGE_MESSAGES"
)]
pub async fn version(ctx: Context<'_>) -> Result<(), AppError> {
    reply(ctx, version_text()).await
}

fn version_text() -> String {
    format!("I am running version {}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::create_test_user;

    #[test]
    fn member_host_is_kept() {
        let host = host_from_user(&create_test_user(42, "alice", false));

        assert_eq!(
            host,
            Some(EventHost {
                user_id: 42,
                name: "alice".to_string(),
            })
        );
    }

    #[test]
    fn bot_host_means_no_host() {
        assert_eq!(host_from_user(&create_test_user(7, "schedulebot", true)), None);
    }

    #[test]
    fn version_names_the_package_version() {
        assert_eq!(
            version_text(),
            format!("I am running version {}", env!("CARGO_PKG_VERSION"))
        );
    }
}
