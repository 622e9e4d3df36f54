//! Staff-only text channels used by the ticket system.

use serenity::{
    all::{
        ChannelId, ChannelType, CreateChannel, GetMessages, GuildId, MessageId,
        PermissionOverwrite, PermissionOverwriteType, Permissions,
    },
    http::Http,
};

use crate::server::error::AppError;

/// Channel holding one embed per open ticket.
pub const TICKETS_LIST_CHANNEL: &str = "tickets-list";
/// Channel receiving a log entry for every closed ticket.
pub const TICKET_HISTORIES_CHANNEL: &str = "ticket-histories";

/// Discord only returns this many messages per request.
const CLEAR_MESSAGE_LIMIT: u8 = 100;

/// Finds a text channel by name, creating it hidden from `@everyone` when missing.
pub async fn find_or_create_private_channel(
    http: &Http,
    guild_id: u64,
    name: &str,
) -> Result<ChannelId, AppError> {
    let guild_id = GuildId::new(guild_id);

    let channels = guild_id.channels(http).await?;
    if let Some(channel) = channels
        .values()
        .find(|c| c.kind == ChannelType::Text && c.name == name)
    {
        return Ok(channel.id);
    }

    let hidden = PermissionOverwrite {
        allow: Permissions::empty(),
        deny: Permissions::VIEW_CHANNEL,
        kind: PermissionOverwriteType::Role(guild_id.everyone_role()),
    };

    let channel = guild_id
        .create_channel(
            http,
            CreateChannel::new(name)
                .kind(ChannelType::Text)
                .permissions(vec![hidden]),
        )
        .await?;

    tracing::info!("Created channel #{} in guild {}", name, guild_id);

    Ok(channel.id)
}

/// Deletes the most recent messages in a channel.
///
/// Tries a bulk delete first. Discord refuses bulk deletes of messages older than two
/// weeks, in which case messages are removed one by one.
pub async fn clear_channel(http: &Http, channel_id: ChannelId) -> Result<(), AppError> {
    let messages = channel_id
        .messages(http, GetMessages::new().limit(CLEAR_MESSAGE_LIMIT))
        .await?;
    let ids: Vec<MessageId> = messages.iter().map(|m| m.id).collect();

    match ids.len() {
        0 => return Ok(()),
        1 => {
            channel_id.delete_message(http, ids[0]).await?;
            return Ok(());
        }
        _ => {}
    }

    if let Err(e) = channel_id.delete_messages(http, ids.iter().copied()).await {
        tracing::debug!(
            "Bulk delete in channel {} failed, deleting individually: {}",
            channel_id,
            e
        );
        for id in ids {
            if let Err(e) = channel_id.delete_message(http, id).await {
                tracing::warn!("Failed to delete message {} in {}: {}", id, channel_id, e);
            }
        }
    }

    Ok(())
}
