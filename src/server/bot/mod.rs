//! Discord bot: slash commands, announcement buttons and ticket logging.
//!
//! Slash commands are served by a poise framework (`commands`). Raw gateway events the
//! framework does not cover, such as button presses and thread messages, go through
//! the serenity `EventHandler` in `handler`.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild, channel and thread state
//! - `GUILD_MESSAGES` - Messages posted in ticket threads
//! - `MESSAGE_CONTENT` - Text of those messages (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod commands;
pub mod handler;
pub mod start;
