use super::*;
use test_utils::factory::attendance::AttendanceFactory;

/// Tests listing attendees of one event.
///
/// Verifies that attendees of other events are not included and order follows sign-up.
///
/// Expected: Ok with the event's attendees in sign-up order
#[tokio::test]
async fn lists_attendees_of_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let schedule = factory::create_schedule(db, "100").await?;
    let other = factory::create_schedule(db, "100").await?;
    AttendanceFactory::new(db, schedule.id)
        .user("11", "alice")
        .build()
        .await?;
    AttendanceFactory::new(db, schedule.id)
        .user("12", "bob")
        .build()
        .await?;
    factory::create_attendance(db, other.id).await?;

    let attendees = AttendanceRepository::new(db)
        .get_by_schedule(schedule.id)
        .await?;
    let names: Vec<&str> = attendees.iter().map(|a| a.user_name.as_str()).collect();

    assert_eq!(names, vec!["alice", "bob"]);

    Ok(())
}
