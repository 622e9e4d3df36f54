//! Embed and button rendering for event announcements.

use serenity::all::{ButtonStyle, CreateActionRow, CreateButton, CreateEmbed};

use crate::server::model::schedule::{EventStatus, Schedule};

const SIGN_UP_PREFIX: &str = "event_signup:";
const WITHDRAW_PREFIX: &str = "event_withdraw:";

const COLOR_UPCOMING: u32 = 0x3498db;
const COLOR_LIVE: u32 = 0x2ecc71;
const COLOR_ENDED: u32 = 0x95a5a6;

/// A pressed announcement button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventButton {
    SignUp(i32),
    Withdraw(i32),
}

impl EventButton {
    pub fn custom_id(&self) -> String {
        match self {
            EventButton::SignUp(id) => format!("{}{}", SIGN_UP_PREFIX, id),
            EventButton::Withdraw(id) => format!("{}{}", WITHDRAW_PREFIX, id),
        }
    }
}

/// Parses a button custom id; `None` for ids this bot did not create.
pub fn parse_component_id(custom_id: &str) -> Option<EventButton> {
    if let Some(id) = custom_id.strip_prefix(SIGN_UP_PREFIX) {
        return id.parse().ok().map(EventButton::SignUp);
    }
    if let Some(id) = custom_id.strip_prefix(WITHDRAW_PREFIX) {
        return id.parse().ok().map(EventButton::Withdraw);
    }
    None
}

/// Builds the announcement embed.
///
/// # Arguments
/// - `schedule` - Event to render
/// - `attendee_count` - Current number of sign-ups
///
/// # Returns
/// - `CreateEmbed` - Embed colored by the event status
pub fn build_event_embed(schedule: &Schedule, attendee_count: u64) -> CreateEmbed {
    let status = schedule.status();
    let color = match status {
        EventStatus::Upcoming => COLOR_UPCOMING,
        EventStatus::Live => COLOR_LIVE,
        EventStatus::Ended => COLOR_ENDED,
    };

    let start = schedule.start_time.timestamp();
    let end = schedule.end_time.timestamp();

    let mut embed = CreateEmbed::new()
        .title(&schedule.title)
        .description(&schedule.description)
        .color(color)
        .field("Start", format!("<t:{}:F> (<t:{}:R>)", start, start), false)
        .field("End", format!("<t:{}:F>", end), false);

    if let Some(host) = &schedule.host {
        embed = embed.field("Host", format!("<@{}>", host.user_id), true);
    }
    if !schedule.host_url.is_empty() {
        embed = embed.field("Host Profile", &schedule.host_url, true);
    }
    if let Some(world_link) = &schedule.world_link {
        embed = embed.field("World", world_link, false);
    }

    embed = embed
        .field("Attendees", attendee_count.to_string(), true)
        .field("Status", status.label(), true);

    if let Some(image_url) = &schedule.image_url {
        embed = embed.image(image_url);
    }

    embed
}

/// Sign-up and withdraw buttons, disabled once the event has ended.
pub fn build_event_components(schedule: &Schedule) -> Vec<CreateActionRow> {
    let ended = schedule.has_ended;
    vec![CreateActionRow::Buttons(vec![
        CreateButton::new(EventButton::SignUp(schedule.id).custom_id())
            .label("Sign Up")
            .style(ButtonStyle::Success)
            .disabled(ended),
        CreateButton::new(EventButton::Withdraw(schedule.id).custom_id())
            .label("Withdraw")
            .style(ButtonStyle::Secondary)
            .disabled(ended),
    ])]
}
