//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an event in `guild_id` with `count` signed-up attendees.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID owning the event
/// - `count` - Number of attendance rows to create
///
/// # Returns
/// - `Ok((schedule, attendees))` - Created event and its attendance rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_schedule_with_attendees(
    db: &DatabaseConnection,
    guild_id: &str,
    count: usize,
) -> Result<
    (
        entity::schedule::Model,
        Vec<entity::attendance::Model>,
    ),
    DbErr,
> {
    let schedule = crate::factory::schedule::create_schedule(db, guild_id).await?;

    let mut attendees = Vec::with_capacity(count);
    for _ in 0..count {
        attendees.push(crate::factory::attendance::create_attendance(db, schedule.id).await?);
    }

    Ok((schedule, attendees))
}
