//! Attendance report rendering.

use crate::server::{
    error::AppError,
    model::{attendance::Attendance, report::AttendanceReportRow, schedule::Schedule},
};

/// File name used when the report is sent as an attachment.
pub const REPORT_FILE_NAME: &str = "AttendanceReport.csv";

/// Flattens ended events and their attendees into one row per attendee.
pub fn build_report_rows(events: &[(Schedule, Vec<Attendance>)]) -> Vec<AttendanceReportRow> {
    events
        .iter()
        .flat_map(|(schedule, attendees)| {
            attendees.iter().map(move |attendee| AttendanceReportRow {
                event_id: schedule.message_id.unwrap_or_default(),
                date: schedule.start_time,
                description: schedule.description.clone(),
                name: schedule.title.clone(),
                user_id: attendee.user_id,
                user_name: attendee.user_name.clone(),
            })
        })
        .collect()
}

/// Renders report rows as CSV with a header line.
///
/// # Returns
/// - `Ok(Vec<u8>)` - UTF-8 CSV bytes
/// - `Err(AppError::CsvErr)` - A row failed to serialize
pub fn render_report_csv(rows: &[AttendanceReportRow]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    if rows.is_empty() {
        writer.write_record(["EventId", "Date", "Description", "Name", "UserId", "UserName"])?;
    }
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::InternalError(format!("Failed to flush report CSV: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn schedule(id: i32, message_id: Option<u64>, title: &str) -> Schedule {
        let start = Utc.with_ymd_and_hms(2025, 3, 10, 18, 0, 0).unwrap();
        Schedule {
            id,
            message_id,
            channel_id: Some(200),
            guild_id: 100,
            title: title.to_string(),
            description: "Bring snacks, friends".to_string(),
            start_time: start,
            end_time: start + chrono::Duration::hours(2),
            host: None,
            host_url: String::new(),
            world_link: None,
            image_url: None,
            role_id: 700 + id as u64,
            is_active: false,
            has_ended: true,
            created_at: start,
        }
    }

    fn attendee(schedule_id: i32, user_id: u64, name: &str) -> Attendance {
        Attendance {
            id: user_id as i32,
            schedule_id,
            user_id,
            user_name: name.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn one_row_per_attendee() {
        let events = vec![
            (
                schedule(1, Some(900), "Movie Night"),
                vec![attendee(1, 11, "alice"), attendee(1, 12, "bob")],
            ),
            (schedule(2, None, "Quiet Night"), vec![]),
        ];

        let rows = build_report_rows(&events);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].event_id, 900);
        assert_eq!(rows[0].name, "Movie Night");
        assert_eq!(rows[1].user_name, "bob");
    }

    #[test]
    fn renders_header_and_quoted_fields() {
        let events = vec![(
            schedule(1, Some(900), "Movie Night"),
            vec![attendee(1, 11, "alice")],
        )];
        let csv = String::from_utf8(render_report_csv(&build_report_rows(&events)).unwrap()).unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some("EventId,Date,Description,Name,UserId,UserName")
        );
        assert_eq!(
            lines.next(),
            Some("900,2025-03-10T18:00:00Z,\"Bring snacks, friends\",Movie Night,11,alice")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_report_still_has_header() {
        let csv = String::from_utf8(render_report_csv(&[]).unwrap()).unwrap();
        assert_eq!(csv, "EventId,Date,Description,Name,UserId,UserName\n");
    }
}
