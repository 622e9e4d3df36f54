//! Cron jobs running alongside the bot.

pub mod event_lifecycle;
