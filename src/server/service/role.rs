//! Per-event access roles.
//!
//! Every event owns a mentionable role named `{prefix}-{n}`. Attendees hold the role while
//! the event is not over, and the role is deleted when the event ends.

use std::collections::HashSet;

use serenity::{
    all::{EditRole, GuildId, RoleId, UserId},
    http::Http,
};

use crate::server::error::AppError;

/// Audit log reason attached to role changes.
const ROLE_AUDIT_REASON: &str = "Event sign-up";

/// Picks the first `{prefix}-{n}` (n >= 1) not present in `taken`.
pub fn next_event_role_name(prefix: &str, taken: &HashSet<String>) -> String {
    (1u64..)
        .map(|n| format!("{}-{}", prefix, n))
        .find(|name| !taken.contains(name))
        .unwrap_or_else(|| format!("{}-0", prefix))
}

/// Names of all roles currently in the guild.
pub async fn guild_role_names(http: &Http, guild_id: u64) -> Result<HashSet<String>, AppError> {
    let roles = GuildId::new(guild_id).roles(http).await?;
    Ok(roles.into_values().map(|role| role.name).collect())
}

/// Creates a mentionable role and returns its id.
pub async fn create_event_role(http: &Http, guild_id: u64, name: &str) -> Result<u64, AppError> {
    let role = GuildId::new(guild_id)
        .create_role(http, EditRole::new().name(name).mentionable(true))
        .await?;

    tracing::info!("Created event role {} ({}) in guild {}", name, role.id, guild_id);
    Ok(role.id.get())
}

/// Creates the next free event role for the guild.
pub async fn create_next_event_role(
    http: &Http,
    guild_id: u64,
    prefix: &str,
) -> Result<u64, AppError> {
    let taken = guild_role_names(http, guild_id).await?;
    let name = next_event_role_name(prefix, &taken);
    create_event_role(http, guild_id, &name).await
}

/// Whether the role still exists in the guild.
pub async fn role_exists(http: &Http, guild_id: u64, role_id: u64) -> Result<bool, AppError> {
    let roles = GuildId::new(guild_id).roles(http).await?;
    Ok(roles.contains_key(&RoleId::new(role_id)))
}

/// Deletes an event role. Failures are logged and swallowed.
pub async fn delete_event_role(http: &Http, guild_id: u64, role_id: u64) {
    if let Err(e) = GuildId::new(guild_id)
        .delete_role(http, RoleId::new(role_id))
        .await
    {
        tracing::warn!(
            "Failed to delete event role {} in guild {}: {}",
            role_id,
            guild_id,
            e
        );
    }
}

pub async fn grant_role(
    http: &Http,
    guild_id: u64,
    user_id: u64,
    role_id: u64,
) -> Result<(), AppError> {
    http.add_member_role(
        GuildId::new(guild_id),
        UserId::new(user_id),
        RoleId::new(role_id),
        Some(ROLE_AUDIT_REASON),
    )
    .await?;
    Ok(())
}

pub async fn revoke_role(
    http: &Http,
    guild_id: u64,
    user_id: u64,
    role_id: u64,
) -> Result<(), AppError> {
    http.remove_member_role(
        GuildId::new(guild_id),
        UserId::new(user_id),
        RoleId::new(role_id),
        Some(ROLE_AUDIT_REASON),
    )
    .await?;
    Ok(())
}
