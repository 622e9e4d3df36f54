use super::*;
use test_utils::factory::{attendance::AttendanceFactory, schedule::ScheduleFactory};

/// Tests fetching ended events in a range together with their attendees.
///
/// Verifies that events outside the range, unended events, and events in other
/// guilds are excluded.
///
/// Expected: Ok with the single qualifying event and its two attendees
#[tokio::test]
async fn returns_ended_events_in_range_with_attendees() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let day = Utc.with_ymd_and_hms(2025, 3, 10, 18, 0, 0).unwrap();

    let included = ScheduleFactory::new(db, "100")
        .start_time(day)
        .end_time(day + Duration::hours(2))
        .has_ended(true)
        .build()
        .await?;
    AttendanceFactory::new(db, included.id)
        .user("11", "alice")
        .build()
        .await?;
    AttendanceFactory::new(db, included.id)
        .user("12", "bob")
        .build()
        .await?;

    // Not ended
    ScheduleFactory::new(db, "100")
        .start_time(day)
        .end_time(day + Duration::hours(2))
        .build()
        .await?;
    // Outside range
    ScheduleFactory::new(db, "100")
        .start_time(day + Duration::days(30))
        .end_time(day + Duration::days(30) + Duration::hours(2))
        .has_ended(true)
        .build()
        .await?;
    // Other guild
    ScheduleFactory::new(db, "200")
        .start_time(day)
        .end_time(day + Duration::hours(2))
        .has_ended(true)
        .build()
        .await?;

    let rows = ScheduleRepository::new(db)
        .get_ended_with_attendees(100, day - Duration::days(1), day + Duration::days(1))
        .await?;

    assert_eq!(rows.len(), 1);
    let (schedule, attendees) = &rows[0];
    assert_eq!(schedule.id, included.id);
    let mut names: Vec<&str> = attendees.iter().map(|a| a.user_name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["alice", "bob"]);

    Ok(())
}

/// Tests that ended events without attendees are still returned.
///
/// Expected: Ok with one event and an empty attendee list
#[tokio::test]
async fn returns_event_without_attendees() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let day = Utc.with_ymd_and_hms(2025, 3, 10, 18, 0, 0).unwrap();
    ScheduleFactory::new(db, "100")
        .start_time(day)
        .end_time(day + Duration::hours(1))
        .has_ended(true)
        .build()
        .await?;

    let rows = ScheduleRepository::new(db)
        .get_ended_with_attendees(100, day - Duration::days(1), day + Duration::days(1))
        .await?;

    assert_eq!(rows.len(), 1);
    assert!(rows[0].1.is_empty());

    Ok(())
}
