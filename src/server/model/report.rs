//! Attendance report rows.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One attendee of one ended event, as written to the report CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttendanceReportRow {
    /// Announcement message id, or 0 if the event was never posted.
    pub event_id: u64,
    pub date: DateTime<Utc>,
    pub description: String,
    /// Event title.
    pub name: String,
    pub user_id: u64,
    pub user_name: String,
}
