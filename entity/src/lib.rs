//! SeaORM entity models for the schedulebot database.

pub mod prelude;

pub mod attendance;
pub mod schedule;
pub mod server_setting;
pub mod ticket;
pub mod ticket_message;
