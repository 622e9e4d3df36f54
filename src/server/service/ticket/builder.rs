//! Ticket embed rendering for the list channel, the list command and closure logs.

use serenity::all::CreateEmbed;

use crate::server::model::{ticket::Ticket, ticket_message::TicketMessage};

const COLOR_OPEN: u32 = 0x2ecc71;
const COLOR_CLOSED: u32 = 0xe74c3c;
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Discord rejects embed field values longer than this.
const FIELD_VALUE_LIMIT: usize = 1024;

const RECENT_MESSAGE_COUNT: usize = 5;
const CLOSURE_MESSAGE_COUNT: usize = 10;

/// Joins the first `limit` messages as `**sender**: content` lines.
///
/// Returns `None` when there are no messages.
pub fn summarize_messages(messages: &[TicketMessage], limit: usize) -> Option<String> {
    if messages.is_empty() {
        return None;
    }

    let mut summary = messages
        .iter()
        .take(limit)
        .map(|m| format!("**{}**: {}", m.sender_username, m.content))
        .collect::<Vec<_>>()
        .join("\n");

    if messages.len() > limit {
        summary.push_str(&format!("\n... and {} more messages", messages.len() - limit));
    }

    Some(truncate_field(summary))
}

fn truncate_field(value: String) -> String {
    if value.chars().count() <= FIELD_VALUE_LIMIT {
        return value;
    }
    let mut truncated: String = value.chars().take(FIELD_VALUE_LIMIT - 3).collect();
    truncated.push_str("...");
    truncated
}

/// Builds the embed describing a ticket.
///
/// # Arguments
/// - `ticket` - Ticket to render
/// - `messages` - Transcript to preview as "Recent Messages", if wanted
pub fn build_ticket_embed(ticket: &Ticket, messages: Option<&[TicketMessage]>) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(format!("Ticket #{}: {}", ticket.id, ticket.ticket_type))
        .description(format!("Created by {}", ticket.creator_username))
        .field("Status", ticket.status.as_str(), true)
        .field(
            "Created At",
            ticket.created_at.format(TIME_FORMAT).to_string(),
            true,
        )
        .color(if ticket.is_open() {
            COLOR_OPEN
        } else {
            COLOR_CLOSED
        });

    if let Some(staff_id) = ticket.assigned_staff_user_id {
        embed = embed.field("Assigned To", format!("<@{}>", staff_id), true);
    }

    if !ticket.is_open() {
        if let Some(closed_at) = ticket.closed_at {
            embed = embed.field("Closed At", closed_at.format(TIME_FORMAT).to_string(), true);
            if let Some(reason) = ticket.closure_reason.as_deref().filter(|r| !r.is_empty()) {
                embed = embed.field("Closure Reason", truncate_field(reason.to_string()), false);
            }
        }
    }

    if let Some(summary) = messages.and_then(|m| summarize_messages(m, RECENT_MESSAGE_COUNT)) {
        embed = embed.field("Recent Messages", summary, false);
    }

    embed
}

/// Builds the log entry posted to the ticket history channel when a ticket closes.
pub fn build_closure_embed(
    ticket: &Ticket,
    messages: &[TicketMessage],
    closed_by: &str,
) -> CreateEmbed {
    let closed_at = ticket
        .closed_at
        .map(|at| at.format(TIME_FORMAT).to_string())
        .unwrap_or_else(|| "Unknown".to_string());

    let mut embed = CreateEmbed::new()
        .title(format!("Ticket #{}: {}", ticket.id, ticket.ticket_type))
        .description(format!("Created by {}", ticket.creator_username))
        .field("Status", "Closed", true)
        .field(
            "Created At",
            ticket.created_at.format(TIME_FORMAT).to_string(),
            true,
        )
        .field("Closed At", closed_at, true)
        .field("Closed By", closed_by, true)
        .color(COLOR_CLOSED);

    if let Some(reason) = ticket.closure_reason.as_deref().filter(|r| !r.is_empty()) {
        embed = embed.field("Closure Reason", truncate_field(reason.to_string()), false);
    }

    if let Some(summary) = summarize_messages(messages, CLOSURE_MESSAGE_COUNT) {
        embed = embed.field("Messages", summary, false);
    }

    embed
}
