use std::fmt;
use thiserror::Error;

/// Kind of link a user supplied to an event command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    HostUrl,
    WorldLink,
    ImageLink,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkKind::HostUrl => write!(f, "Host URL"),
            LinkKind::WorldLink => write!(f, "World Link"),
            LinkKind::ImageLink => write!(f, "Image Link"),
        }
    }
}

/// Validation and precondition failures raised by slash commands.
///
/// The `Display` text of every variant is sent back to the invoking user verbatim.
#[derive(Error, Debug, PartialEq)]
pub enum CommandError {
    #[error("This command can only be used in a server.")]
    GuildOnly,

    #[error("No Event Channel Set. Have admin set channel using /seteventchannel")]
    NoEventChannel,

    #[error("No channel set. Use /seteventchannel.")]
    NoChannelForRefresh,

    #[error("Not a valid Start Time Format")]
    InvalidStartTime,

    #[error("Not a valid End Time Format")]
    InvalidEndTime,

    #[error("Not a valid {0}. Ensure link starts with http:// or https://")]
    InvalidLink(LinkKind),

    #[error("Not a valid message Id")]
    InvalidMessageId,

    #[error("Unable to get an event of that Id")]
    EventNotFound,

    #[error("Unable to create role. Check Permissions as this role already exists.")]
    RoleMissing,

    #[error("**{0}** has already ended.")]
    EventEnded(String),

    #[error("This command can only be used in an open ticket thread.")]
    NotTicketThread,

    #[error("You don't have permission to close this ticket.")]
    TicketPermission,

    #[error("You need the Manage Channels permission to do that.")]
    ManageChannelsRequired,

    #[error("Hours must be a non-zero whole number.")]
    ZeroHours,

    #[error("Hours must be between -24 and 24.")]
    HoursOutOfRange,

    #[error("Attach a TeamUp CSV export to import.")]
    MissingImportFile,

    #[error("Row {row} of the import could not be read: {reason}")]
    InvalidImportRow {
        /// 1-based data row (header excluded)
        row: usize,
        reason: String,
    },
}
