mod attendance;
mod schedule;
mod server_setting;
mod ticket;
mod ticket_message;
