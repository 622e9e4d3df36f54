//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot commands, the scheduler and the web API on one side and the
//! repositories on the other. They validate command input, coordinate database writes with
//! Discord calls, and clean up after partial failures.

pub mod dst;
pub mod event;
pub mod event_message;
pub mod import;
pub mod report;
pub mod role;
pub mod schedule;
pub mod ticket;
