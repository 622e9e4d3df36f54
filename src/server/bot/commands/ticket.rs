//! Support ticket commands.
//!
//! Anyone may open a ticket. Closing is limited to the ticket's creator and staff, and
//! listing or refreshing tickets needs MANAGE_CHANNELS.

use poise::CreateReply;

use crate::server::{
    error::AppError,
    model::ticket::TicketType,
    service::ticket::TicketService,
};

use super::{guild_id, is_staff, reply_outcome, Context};

fn ticket_service(ctx: Context<'_>) -> TicketService<'_> {
    TicketService::new(&ctx.data().db, ctx.serenity_context().http.clone())
}

/// Commands for managing tickets
#[poise::command(
    slash_command,
    guild_only,
    subcommands("open", "close", "list", "refresh"),
    subcommand_required
)]
pub async fn ticket(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Open a new ticket
#[poise::command(slash_command, guild_only)]
pub async fn open(
    ctx: Context<'_>,
    #[rename = "type"]
    #[description = "The type of ticket to open"]
    ticket_type: TicketType,
) -> Result<(), AppError> {
    ctx.defer_ephemeral().await?;
    let guild_id = guild_id(ctx)?;
    let author = ctx.author();

    let outcome = ticket_service(ctx)
        .open(
            guild_id,
            ctx.channel_id().get(),
            author.id.get(),
            &author.name,
            ticket_type,
        )
        .await;

    reply_outcome(
        ctx,
        outcome,
        "There was an error opening your ticket. Please try again later.",
    )
    .await
}

/// Close an existing ticket
#[poise::command(slash_command, guild_only)]
pub async fn close(
    ctx: Context<'_>,
    #[description = "The reason for closing the ticket"] reason: Option<String>,
) -> Result<(), AppError> {
    ctx.defer_ephemeral().await?;
    let guild_id = guild_id(ctx)?;
    let author = ctx.author();
    let is_staff = is_staff(ctx).await;

    let outcome = ticket_service(ctx)
        .close(
            guild_id,
            ctx.channel_id().get(),
            author.id.get(),
            &author.name,
            is_staff,
            reason,
        )
        .await;

    reply_outcome(
        ctx,
        outcome,
        "There was an error closing the ticket. Please try again later.",
    )
    .await
}

/// List all open tickets
#[poise::command(slash_command, guild_only)]
pub async fn list(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.defer_ephemeral().await?;
    let guild_id = guild_id(ctx)?;
    let is_staff = is_staff(ctx).await;

    let listing = match ticket_service(ctx).list(guild_id, is_staff).await {
        Ok(listing) => listing,
        Err(e) => {
            return reply_outcome(
                ctx,
                Err(e),
                "There was an error listing tickets. Please try again later.",
            )
            .await
        }
    };

    let reply = listing
        .embeds
        .into_iter()
        .fold(CreateReply::default().content(listing.content), |reply, embed| {
            reply.embed(embed)
        })
        .ephemeral(true);
    ctx.send(reply).await?;

    Ok(())
}

/// Refresh the tickets list channel
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_CHANNELS"
)]
pub async fn refresh(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.defer_ephemeral().await?;
    let guild_id = guild_id(ctx)?;

    let outcome = ticket_service(ctx)
        .refresh_list(guild_id)
        .await
        .map(|()| "Tickets list channel has been refreshed.".to_string());

    reply_outcome(
        ctx,
        outcome,
        "There was an error refreshing the tickets channel. Please try again later.",
    )
    .await
}
