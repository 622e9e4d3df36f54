pub use super::attendance::Entity as Attendance;
pub use super::schedule::Entity as Schedule;
pub use super::server_setting::Entity as ServerSetting;
pub use super::ticket::Entity as Ticket;
pub use super::ticket_message::Entity as TicketMessage;
