use super::*;
use test_utils::factory::schedule::ScheduleFactory;

/// Tests selecting events whose start time has passed.
///
/// Verifies that only inactive, unended events that are currently running are returned.
///
/// Expected: Ok with only the running event
#[tokio::test]
async fn returns_events_due_to_start() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let running = ScheduleFactory::new(db, "100")
        .start_time(now - Duration::minutes(5))
        .end_time(now + Duration::hours(1))
        .build()
        .await?;
    // Already marked active
    ScheduleFactory::new(db, "100")
        .start_time(now - Duration::minutes(5))
        .end_time(now + Duration::hours(1))
        .is_active(true)
        .build()
        .await?;
    // Not started yet
    ScheduleFactory::new(db, "100").build().await?;

    let due = ScheduleRepository::new(db).get_due_to_start(now).await?;

    assert_eq!(due.len(), 1);
    assert_eq!(due[0].id, running.id);

    Ok(())
}

/// Tests selecting events whose end time has passed.
///
/// Expected: Ok with unended events past their end, active or not
#[tokio::test]
async fn returns_events_due_to_end() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let active = ScheduleFactory::new(db, "100")
        .start_time(now - Duration::hours(3))
        .end_time(now - Duration::hours(1))
        .is_active(true)
        .build()
        .await?;
    let never_started = ScheduleFactory::new(db, "100")
        .start_time(now - Duration::hours(3))
        .end_time(now - Duration::minutes(1))
        .build()
        .await?;
    ScheduleFactory::new(db, "100")
        .start_time(now - Duration::hours(3))
        .end_time(now - Duration::hours(1))
        .has_ended(true)
        .build()
        .await?;

    let due = ScheduleRepository::new(db).get_due_to_end(now).await?;
    let mut ids: Vec<i32> = due.iter().map(|s| s.id).collect();
    ids.sort();

    assert_eq!(ids, vec![active.id, never_started.id]);

    Ok(())
}
