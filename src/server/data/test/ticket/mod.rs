use crate::server::{
    data::ticket::TicketRepository,
    error::AppError,
    model::ticket::{CreateTicketParam, TicketStatus, TicketType},
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory, factory::ticket::TicketFactory};

mod close;
mod create;
mod get_open_by_guild;
mod get_open_by_thread;
