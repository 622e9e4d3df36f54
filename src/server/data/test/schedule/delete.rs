use super::*;

/// Tests deleting an event removes its attendance with it.
///
/// Expected: Ok with event and attendance removed
#[tokio::test]
async fn deletes_event_and_attendance() -> Result<(), AppError> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (schedule, _) = factory::helpers::create_schedule_with_attendees(db, "100", 3).await?;

    let repo = ScheduleRepository::new(db);
    let deleted = repo.delete(schedule.id).await?;

    assert_eq!(deleted, 1);
    assert!(repo.get_by_id(schedule.id).await?.is_none());
    let attendance = entity::prelude::Attendance::find().count(db).await?;
    assert_eq!(attendance, 0);

    Ok(())
}

/// Tests deleting an event that does not exist.
///
/// Expected: Ok with zero rows affected
#[tokio::test]
async fn deleting_missing_event_affects_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = ScheduleRepository::new(db).delete(12345).await?;
    assert_eq!(deleted, 0);

    Ok(())
}
