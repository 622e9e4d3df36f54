//! Event announcement messages.
//!
//! `builder` renders the embed and buttons; this module posts and edits them in the
//! announcement channel.

pub mod builder;

use serenity::{
    all::{ChannelId, CreateMessage, EditMessage, MessageId},
    http::Http,
};

use crate::server::{error::AppError, model::schedule::Schedule};

use builder::{build_event_components, build_event_embed};

/// Posts a new announcement and returns its message id.
pub async fn post_announcement(
    http: &Http,
    channel_id: u64,
    schedule: &Schedule,
    attendee_count: u64,
) -> Result<u64, AppError> {
    let message = CreateMessage::new()
        .embed(build_event_embed(schedule, attendee_count))
        .components(build_event_components(schedule));

    let posted = ChannelId::new(channel_id).send_message(http, message).await?;
    Ok(posted.id.get())
}

/// Re-renders an existing announcement.
///
/// Does nothing when the event was never posted.
pub async fn edit_announcement(
    http: &Http,
    schedule: &Schedule,
    attendee_count: u64,
) -> Result<(), AppError> {
    let (Some(channel_id), Some(message_id)) = (schedule.channel_id, schedule.message_id) else {
        return Ok(());
    };

    let edit = EditMessage::new()
        .embed(build_event_embed(schedule, attendee_count))
        .components(build_event_components(schedule));

    http.edit_message(
        ChannelId::new(channel_id),
        MessageId::new(message_id),
        &edit,
        vec![],
    )
    .await?;
    Ok(())
}

/// Deletes an announcement, logging failures.
pub async fn delete_announcement(http: &Http, channel_id: u64, message_id: u64) {
    if let Err(e) = http
        .delete_message(
            ChannelId::new(channel_id),
            MessageId::new(message_id),
            None,
        )
        .await
    {
        tracing::warn!(
            "Failed to delete announcement {} in channel {}: {}",
            message_id,
            channel_id,
            e
        );
    }
}
