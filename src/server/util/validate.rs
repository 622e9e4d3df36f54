//! Free-text validation for slash command arguments.

use std::sync::LazyLock;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use crate::server::error::command::{CommandError, LinkKind};

static DISCORD_TIMECODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<t:(-?\d+):[a-zA-Z]>").expect("timecode pattern is valid"));

static LINK_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("link pattern is valid"));

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

/// Date-time layouts accepted besides RFC 3339. Naive values are read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M %p",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Longest event a duration may describe.
const MAX_DURATION_HOURS: f64 = 24.0 * 31.0;

const CLEAR_KEYWORD: &str = "clear";

/// Parses a point in time from a Discord timecode, RFC 3339 or a common layout.
///
/// Returns the parsed instant and whether the input was a bare date.
fn parse_datetime(text: &str) -> Option<(DateTime<Utc>, bool)> {
    let text = text.trim();

    if let Some(captures) = DISCORD_TIMECODE.captures(text) {
        let seconds = captures[1].parse::<i64>().ok()?;
        return DateTime::from_timestamp(seconds, 0).map(|dt| (dt, false));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some((dt.with_timezone(&Utc), false));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some((naive.and_utc(), false));
        }
    }

    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| (naive.and_utc(), true))
}

/// Parses the start of an event.
pub fn parse_event_start(text: &str) -> Result<DateTime<Utc>, CommandError> {
    parse_datetime(text)
        .map(|(dt, _)| dt)
        .ok_or(CommandError::InvalidStartTime)
}

/// Parses a bound of a date range.
///
/// A bare date used as the end of a range covers that whole day.
pub fn parse_report_date(text: &str, end_of_range: bool) -> Result<DateTime<Utc>, CommandError> {
    let error = if end_of_range {
        CommandError::InvalidEndTime
    } else {
        CommandError::InvalidStartTime
    };

    match parse_datetime(text) {
        Some((dt, true)) if end_of_range => {
            dt.checked_add_signed(Duration::days(1)).ok_or(error)
        }
        Some((dt, _)) => Ok(dt),
        None => Err(error),
    }
}

/// Computes the end of an event from its start and a duration in hours.
pub fn end_from_duration(
    start: DateTime<Utc>,
    hours: f64,
) -> Result<DateTime<Utc>, CommandError> {
    if !hours.is_finite() || hours <= 0.0 || hours > MAX_DURATION_HOURS {
        return Err(CommandError::InvalidEndTime);
    }

    let millis = (hours * 3_600_000.0).round() as i64;
    start
        .checked_add_signed(Duration::milliseconds(millis))
        .ok_or(CommandError::InvalidEndTime)
}

/// Checks a user-supplied link starts with `http://` or `https://`.
pub fn validate_link(kind: LinkKind, text: &str) -> Result<String, CommandError> {
    let text = text.trim();

    if LINK_PREFIX.is_match(text) {
        Ok(text.to_string())
    } else {
        Err(CommandError::InvalidLink(kind))
    }
}

/// Extracts a message id from a raw id or a message jump link.
///
/// Jump links end in the message id, so the last run of digits wins.
pub fn parse_message_id(text: &str) -> Result<u64, CommandError> {
    DIGIT_RUN
        .find_iter(text)
        .last()
        .and_then(|m| m.as_str().parse::<u64>().ok())
        .filter(|id| *id > 0)
        .ok_or(CommandError::InvalidMessageId)
}

/// True when the user asked to remove an optional field.
pub fn is_clear_keyword(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case(CLEAR_KEYWORD)
}

/// Resolves an optional link edit: `clear` removes it, anything else must validate.
pub fn resolve_link_edit(kind: LinkKind, text: &str) -> Result<Option<String>, CommandError> {
    if is_clear_keyword(text) {
        Ok(None)
    } else {
        validate_link(kind, text).map(Some)
    }
}
