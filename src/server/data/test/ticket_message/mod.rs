use crate::server::{
    data::ticket_message::TicketMessageRepository, error::AppError,
    model::ticket_message::CreateTicketMessageParam,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_ticket;
