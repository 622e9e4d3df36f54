use sea_orm::DatabaseConnection;
use serenity::all::{Context, Message};

use crate::server::service::ticket::TicketService;

/// Mirrors messages posted in open ticket threads into the ticket transcript.
pub async fn handle_message(db: &DatabaseConnection, ctx: Context, message: Message) {
    // Only guild messages from people
    if message.author.bot || message.guild_id.is_none() {
        return;
    }

    let service = TicketService::new(db, ctx.http.clone());

    if let Err(e) = service
        .record_message(
            message.channel_id.get(),
            message.author.id.get(),
            &message.author.name,
            &message.content,
        )
        .await
    {
        tracing::error!(
            "Failed to log message {} in channel {}: {}",
            message.id,
            message.channel_id,
            e
        );
    }
}
