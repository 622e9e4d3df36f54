//! Slash commands served through poise.
//!
//! Commands reply ephemerally. Errors a command does not handle itself reach
//! [`on_error`], which logs them and replies with the error's user-facing text.

pub mod event;
pub mod ticket;

use chrono::FixedOffset;
use poise::CreateReply;
use sea_orm::DatabaseConnection;

use crate::server::error::{command::CommandError, AppError};

/// Shared state handed to every command invocation.
#[derive(Clone)]
pub struct Data {
    pub db: DatabaseConnection,
    /// Downloads command attachments.
    pub http_client: reqwest::Client,
    pub event_role_prefix: String,
    /// Offset the times of imported TeamUp exports are read in.
    pub import_utc_offset: FixedOffset,
}

pub type Context<'a> = poise::Context<'a, Data, AppError>;

/// Every command registered with Discord.
pub fn commands() -> Vec<poise::Command<Data, AppError>> {
    vec![
        event::event(),
        event::edit(),
        event::restartevent(),
        event::refresh(),
        event::seteventchannel(),
        event::getattendancereport(),
        event::importevents(),
        event::fixdsttimes(),
        event::version(),
        ticket::ticket(),
    ]
}

/// Framework error hook.
pub async fn on_error(error: poise::FrameworkError<'_, Data, AppError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!("Command /{} failed: {}", ctx.command().qualified_name, error);

            let reply = CreateReply::default()
                .content(error.user_message())
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                tracing::error!("Failed to send error reply: {}", e);
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Error while handling framework error: {}", e);
            }
        }
    }
}

/// Guild the command was invoked in.
fn guild_id(ctx: Context<'_>) -> Result<u64, AppError> {
    ctx.guild_id()
        .map(|id| id.get())
        .ok_or_else(|| CommandError::GuildOnly.into())
}

/// Whether the invoking member holds MANAGE_CHANNELS.
async fn is_staff(ctx: Context<'_>) -> bool {
    ctx.author_member()
        .await
        .and_then(|member| member.permissions)
        .is_some_and(|permissions| permissions.manage_channels())
}

async fn reply(ctx: Context<'_>, content: impl Into<String>) -> Result<(), AppError> {
    ctx.send(CreateReply::default().content(content).ephemeral(true))
        .await?;
    Ok(())
}

/// Replies with the error's own text, or `fallback` for unexpected failures.
async fn reply_error(ctx: Context<'_>, error: AppError, fallback: &str) -> Result<(), AppError> {
    tracing::error!("Command /{} failed: {}", ctx.command().qualified_name, error);
    reply(ctx, error.user_message_or(fallback)).await
}

/// Replies with the outcome of a command.
async fn reply_outcome(
    ctx: Context<'_>,
    outcome: Result<String, AppError>,
    fallback: &str,
) -> Result<(), AppError> {
    match outcome {
        Ok(content) => reply(ctx, content).await,
        Err(e) => reply_error(ctx, e, fallback).await,
    }
}
