//! Database repository layer for all domain entities.
//!
//! Repositories use SeaORM entity models internally and return domain models to keep
//! the data layer separate from the service layer.

pub mod attendance;
pub mod schedule;
pub mod server_setting;
pub mod ticket;
pub mod ticket_message;

#[cfg(test)]
mod test;
