//! Support tickets handled in private threads.
//!
//! A ticket is a database row paired with a private thread. Messages posted in the
//! thread are mirrored into `ticket_message` so a transcript survives the thread being
//! archived. Staff see open tickets in `tickets-list` and closed ones in
//! `ticket-histories`.

pub mod builder;
pub mod channel;
pub mod template;

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::{
    all::{
        ChannelId, ChannelType, CreateEmbed, CreateMessage, CreateThread, EditThread, UserId,
    },
    http::Http,
};
use std::sync::Arc;

use crate::server::{
    data::{ticket::TicketRepository, ticket_message::TicketMessageRepository},
    error::{command::CommandError, AppError},
    model::{
        ticket::{CreateTicketParam, Ticket, TicketType},
        ticket_message::CreateTicketMessageParam,
    },
};

use builder::{build_closure_embed, build_ticket_embed};
use channel::{
    clear_channel, find_or_create_private_channel, TICKETS_LIST_CHANNEL, TICKET_HISTORIES_CHANNEL,
};
use template::template_questions;

pub const NO_OPEN_TICKETS: &str = "There are no open tickets.";

/// Discord accepts at most this many embeds per message.
pub const MAX_LISTED_TICKETS: usize = 10;

/// Text reply plus embeds for the ticket list command.
#[derive(Debug)]
pub struct TicketListing {
    pub content: String,
    pub embeds: Vec<CreateEmbed>,
}

/// Formats the list reply header, noting tickets that did not fit.
pub fn listing_header(total: usize) -> String {
    if total > MAX_LISTED_TICKETS {
        format!(
            "There are {} open tickets (showing the newest {}):",
            total, MAX_LISTED_TICKETS
        )
    } else {
        format!("There are {} open tickets:", total)
    }
}

/// Message posted in a thread when its ticket closes.
pub fn closure_notice(closed_by: u64, reason: Option<&str>) -> String {
    match reason.filter(|r| !r.is_empty()) {
        Some(reason) => format!(
            "This ticket has been closed by <@{}> with reason: {}",
            closed_by, reason
        ),
        None => format!("This ticket has been closed by <@{}>.", closed_by),
    }
}

pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }

    /// Opens a ticket with a private thread in the invoking channel.
    ///
    /// The ticket row is removed again when the thread cannot be created.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the ticket belongs to
    /// - `channel_id` - Channel the thread is created in
    /// - `user_id` / `username` - Ticket creator
    /// - `ticket_type` - Determines the thread name and opening questions
    ///
    /// # Returns
    /// - `Ok(String)` - Reply pointing the user at the new thread
    /// - `Err(AppError)` - Database or Discord failure
    pub async fn open(
        &self,
        guild_id: u64,
        channel_id: u64,
        user_id: u64,
        username: &str,
        ticket_type: TicketType,
    ) -> Result<String, AppError> {
        let repo = TicketRepository::new(self.db);

        let ticket = repo
            .create(CreateTicketParam {
                guild_id,
                ticket_type,
                creator_user_id: user_id,
                creator_username: username.to_string(),
            })
            .await?;

        let thread = ChannelId::new(channel_id)
            .create_thread(
                &self.http,
                CreateThread::new(format!("Ticket-{}-{}", ticket.id, ticket_type))
                    .kind(ChannelType::PrivateThread)
                    .audit_log_reason(&format!("Ticket opened by {}", username)),
            )
            .await;

        let thread = match thread {
            Ok(thread) => thread,
            Err(e) => {
                if let Err(cleanup) = repo.delete(ticket.id).await {
                    tracing::error!("Failed to remove ticket {}: {}", ticket.id, cleanup);
                }
                return Err(e.into());
            }
        };

        repo.set_thread_id(ticket.id, thread.id.get()).await?;

        thread
            .id
            .add_thread_member(&self.http, UserId::new(user_id))
            .await?;
        thread
            .id
            .send_message(
                &self.http,
                CreateMessage::new().content(template_questions(ticket_type)),
            )
            .await?;

        tracing::info!(
            "Opened ticket {} ({}) for {} in guild {}",
            ticket.id,
            ticket_type,
            username,
            guild_id
        );

        if let Err(e) = self.refresh_list(guild_id).await {
            tracing::error!("Failed to refresh tickets list in guild {}: {}", guild_id, e);
        }

        Ok(format!(
            "Ticket #{} has been opened. Please check the thread <#{}> to provide more information.",
            ticket.id, thread.id
        ))
    }

    /// Closes the open ticket attached to `thread_id`.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the command ran in
    /// - `thread_id` - Channel the command ran in
    /// - `user_id` / `username` - Caller
    /// - `is_staff` - Caller holds MANAGE_CHANNELS
    /// - `reason` - Optional closure reason
    ///
    /// # Returns
    /// - `Ok(String)` - Confirmation reply
    /// - `Err(CommandError::NotTicketThread)` - Not an open ticket thread
    /// - `Err(CommandError::TicketPermission)` - Caller is neither creator nor staff
    pub async fn close(
        &self,
        guild_id: u64,
        thread_id: u64,
        user_id: u64,
        username: &str,
        is_staff: bool,
        reason: Option<String>,
    ) -> Result<String, AppError> {
        let repo = TicketRepository::new(self.db);

        let ticket = repo
            .get_open_by_thread(thread_id)
            .await?
            .ok_or(CommandError::NotTicketThread)?;

        if ticket.creator_user_id != user_id && !is_staff {
            return Err(CommandError::TicketPermission.into());
        }

        let reason = reason.filter(|r| !r.trim().is_empty());
        let ticket = repo
            .close(ticket.id, reason)
            .await?
            .ok_or(CommandError::NotTicketThread)?;

        let thread = ChannelId::new(thread_id);
        thread
            .send_message(
                &self.http,
                CreateMessage::new()
                    .content(closure_notice(user_id, ticket.closure_reason.as_deref())),
            )
            .await?;
        thread
            .edit_thread(&self.http, EditThread::new().archived(true).locked(true))
            .await?;

        tracing::info!(
            "Closed ticket {} in guild {} by {}",
            ticket.id,
            guild_id,
            username
        );

        if let Err(e) = self.log_closure(&ticket, username).await {
            tracing::error!("Failed to log closure of ticket {}: {}", ticket.id, e);
        }

        Ok(format!("Ticket #{} has been closed.", ticket.id))
    }

    /// Posts the closure log entry and refreshes the list channel.
    async fn log_closure(&self, ticket: &Ticket, closed_by: &str) -> Result<(), AppError> {
        let histories =
            find_or_create_private_channel(&self.http, ticket.guild_id, TICKET_HISTORIES_CHANNEL)
                .await?;
        let messages = TicketMessageRepository::new(self.db)
            .get_by_ticket(ticket.id)
            .await?;

        histories
            .send_message(
                &self.http,
                CreateMessage::new().embed(build_closure_embed(ticket, &messages, closed_by)),
            )
            .await?;

        self.refresh_list(ticket.guild_id).await
    }

    /// Open tickets in a guild for the list command, newest first.
    ///
    /// # Returns
    /// - `Ok(TicketListing)` - Header text and up to ten embeds
    /// - `Err(CommandError::ManageChannelsRequired)` - Caller is not staff
    pub async fn list(&self, guild_id: u64, is_staff: bool) -> Result<TicketListing, AppError> {
        if !is_staff {
            return Err(CommandError::ManageChannelsRequired.into());
        }

        let tickets = TicketRepository::new(self.db)
            .get_open_by_guild(guild_id)
            .await?;

        if tickets.is_empty() {
            return Ok(TicketListing {
                content: NO_OPEN_TICKETS.to_string(),
                embeds: Vec::new(),
            });
        }

        let embeds = tickets
            .iter()
            .take(MAX_LISTED_TICKETS)
            .map(|t| build_ticket_embed(t, None))
            .collect();

        Ok(TicketListing {
            content: listing_header(tickets.len()),
            embeds,
        })
    }

    /// Rebuilds the `tickets-list` channel with one embed per open ticket.
    pub async fn refresh_list(&self, guild_id: u64) -> Result<(), AppError> {
        let channel =
            find_or_create_private_channel(&self.http, guild_id, TICKETS_LIST_CHANNEL).await?;
        let tickets = TicketRepository::new(self.db)
            .get_open_by_guild(guild_id)
            .await?;

        clear_channel(&self.http, channel).await?;

        if tickets.is_empty() {
            channel
                .send_message(&self.http, CreateMessage::new().content(NO_OPEN_TICKETS))
                .await?;
            return Ok(());
        }

        for ticket in &tickets {
            channel
                .send_message(
                    &self.http,
                    CreateMessage::new().embed(build_ticket_embed(ticket, None)),
                )
                .await?;
        }

        tracing::debug!(
            "Refreshed tickets list in guild {} with {} tickets",
            guild_id,
            tickets.len()
        );

        Ok(())
    }

    /// Mirrors a thread message into the ticket transcript.
    ///
    /// # Returns
    /// - `Ok(true)` - The channel was an open ticket thread and the message was stored
    /// - `Ok(false)` - Not a ticket thread
    pub async fn record_message(
        &self,
        thread_id: u64,
        sender_user_id: u64,
        sender_username: &str,
        content: &str,
    ) -> Result<bool, AppError> {
        let Some(ticket) = TicketRepository::new(self.db)
            .get_open_by_thread(thread_id)
            .await?
        else {
            return Ok(false);
        };

        TicketMessageRepository::new(self.db)
            .create(CreateTicketMessageParam {
                ticket_id: ticket.id,
                sender_user_id,
                sender_username: sender_username.to_string(),
                content: content.to_string(),
                timestamp: Utc::now(),
            })
            .await?;

        tracing::debug!(
            "Logged message in ticket {} from {}",
            ticket.id,
            sender_username
        );

        Ok(true)
    }
}
