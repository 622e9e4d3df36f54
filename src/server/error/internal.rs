use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Stored Discord snowflakes are always numeric, so this points at corrupt data.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// A stored enum column holds a value the code does not know
    #[error("Unknown value '{value}' in column {column}")]
    UnknownStoredValue {
        /// Column the value was read from
        column: &'static str,
        /// The stored value
        value: String,
    },
}
