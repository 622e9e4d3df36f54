//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller or embed-builder boundary. Discord snowflakes
//! are stored as strings and surface here as `u64`.

pub mod attendance;
pub mod report;
pub mod schedule;
pub mod server_setting;
pub mod ticket;
pub mod ticket_message;
