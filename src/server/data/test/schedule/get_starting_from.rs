use super::*;
use test_utils::factory::schedule::ScheduleFactory;

/// Tests listing a guild's events from a given start onwards.
///
/// Expected: Ok with later events in start order and earlier ones excluded
#[tokio::test]
async fn returns_events_from_cutoff_in_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cutoff = Utc.with_ymd_and_hms(2025, 3, 9, 0, 0, 0).unwrap();
    ScheduleFactory::new(db, "100")
        .title("Before")
        .start_time(cutoff - Duration::days(1))
        .end_time(cutoff - Duration::days(1) + Duration::hours(1))
        .build()
        .await?;
    ScheduleFactory::new(db, "100")
        .title("Later")
        .start_time(cutoff + Duration::days(5))
        .end_time(cutoff + Duration::days(5) + Duration::hours(1))
        .build()
        .await?;
    ScheduleFactory::new(db, "100")
        .title("Sooner")
        .start_time(cutoff + Duration::days(1))
        .end_time(cutoff + Duration::days(1) + Duration::hours(1))
        .build()
        .await?;

    let events = ScheduleRepository::new(db)
        .get_starting_from(100, cutoff)
        .await?;
    let titles: Vec<&str> = events.iter().map(|s| s.title.as_str()).collect();

    assert_eq!(titles, vec!["Sooner", "Later"]);

    Ok(())
}

/// Tests listing unended events for a guild.
///
/// Expected: Ok with ended events excluded
#[tokio::test]
async fn unended_excludes_ended_events() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let open = factory::create_schedule(db, "100").await?;
    ScheduleFactory::new(db, "100").has_ended(true).build().await?;

    let events = ScheduleRepository::new(db).get_unended_by_guild(100).await?;

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, open.id);

    Ok(())
}
