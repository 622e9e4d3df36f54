//! Announcement button presses.
//!
//! Sign-up and withdraw buttons carry the event id in their custom id. Presses are
//! acknowledged ephemerally first since granting roles and re-rendering the
//! announcement can exceed Discord's three second response window.

use sea_orm::DatabaseConnection;
use serenity::all::{ComponentInteraction, Context, EditInteractionResponse, Interaction};

use crate::server::service::{
    event::EventService,
    event_message::builder::{parse_component_id, EventButton},
};

/// Handles component interactions on event announcements.
///
/// Other interaction kinds and unknown custom ids are ignored.
pub async fn handle_interaction(db: &DatabaseConnection, ctx: Context, interaction: Interaction) {
    let Interaction::Component(component) = interaction else {
        return;
    };
    let Some(button) = parse_component_id(&component.data.custom_id) else {
        return;
    };

    handle_event_button(db, &ctx, &component, button).await;
}

async fn handle_event_button(
    db: &DatabaseConnection,
    ctx: &Context,
    component: &ComponentInteraction,
    button: EventButton,
) {
    if let Err(e) = component.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to acknowledge button press: {}", e);
        return;
    }

    let service = EventService::new(db, ctx.http.clone());
    let user = &component.user;

    let outcome = match button {
        EventButton::SignUp(schedule_id) => {
            service
                .sign_up(schedule_id, user.id.get(), &user.name)
                .await
        }
        EventButton::Withdraw(schedule_id) => service.withdraw(schedule_id, user.id.get()).await,
    };

    let content = match outcome {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!("Button {:?} pressed by {} failed: {}", button, user.id, e);
            e.user_message()
        }
    };

    if let Err(e) = component
        .edit_response(&ctx.http, EditInteractionResponse::new().content(content))
        .await
    {
        tracing::error!("Failed to reply to button press: {}", e);
    }
}
