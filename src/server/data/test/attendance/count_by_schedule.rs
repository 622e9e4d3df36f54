use super::*;

/// Tests counting attendees of an event.
///
/// Expected: Ok with the number of sign-ups
#[tokio::test]
async fn counts_attendees() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (schedule, _) = factory::helpers::create_schedule_with_attendees(db, "100", 4).await?;
    let empty = factory::create_schedule(db, "100").await?;

    let repo = AttendanceRepository::new(db);
    assert_eq!(repo.count_by_schedule(schedule.id).await?, 4);
    assert_eq!(repo.count_by_schedule(empty.id).await?, 0);

    Ok(())
}
