use super::*;
use test_utils::factory::schedule::ScheduleFactory;

/// Tests paging through events ordered by start time.
///
/// Expected: Ok with the second page holding the later events and the full total
#[tokio::test]
async fn paginates_events_by_start_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let base = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
    for i in 0..5 {
        ScheduleFactory::new(db, "100")
            .title(format!("Event {}", i))
            .start_time(base + Duration::days(i))
            .end_time(base + Duration::days(i) + Duration::hours(1))
            .build()
            .await?;
    }

    let (page, total) = ScheduleRepository::new(db)
        .get_paginated(&ScheduleFilter::default(), 1, 2)
        .await?;

    assert_eq!(total, 5);
    let titles: Vec<&str> = page.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Event 2", "Event 3"]);

    Ok(())
}

/// Tests filtering by guild, date range and lifecycle flags.
///
/// Expected: Ok with only events matching every filter
#[tokio::test]
async fn applies_all_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let base = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
    let matching = ScheduleFactory::new(db, "100")
        .start_time(base)
        .end_time(base + Duration::hours(1))
        .build()
        .await?;
    // Ended
    ScheduleFactory::new(db, "100")
        .start_time(base)
        .end_time(base + Duration::hours(1))
        .has_ended(true)
        .build()
        .await?;
    // Wrong guild
    ScheduleFactory::new(db, "200")
        .start_time(base)
        .end_time(base + Duration::hours(1))
        .build()
        .await?;
    // Outside range
    ScheduleFactory::new(db, "100")
        .start_time(base + Duration::days(10))
        .end_time(base + Duration::days(10) + Duration::hours(1))
        .build()
        .await?;

    let filter = ScheduleFilter {
        guild_id: Some(100),
        start_from: Some(base - Duration::days(1)),
        end_until: Some(base + Duration::days(1)),
        is_active: Some(false),
        has_ended: Some(false),
    };
    let (page, total) = ScheduleRepository::new(db)
        .get_paginated(&filter, 0, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(page[0].id, matching.id);

    Ok(())
}

/// Tests requesting a page beyond the last.
///
/// Expected: Ok with empty page and unchanged total
#[tokio::test]
async fn returns_empty_page_past_end() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_schedule(db, "100").await?;

    let (page, total) = ScheduleRepository::new(db)
        .get_paginated(&ScheduleFilter::default(), 5, 10)
        .await?;

    assert!(page.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
