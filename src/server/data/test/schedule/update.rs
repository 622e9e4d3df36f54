use super::*;

/// Tests writing edited fields back to the database.
///
/// Expected: Ok with every edited field persisted
#[tokio::test]
async fn updates_event_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScheduleRepository::new(db);
    let mut schedule = repo.create(create_param(100, 7101)).await?;

    schedule.title = "Game Night".to_string();
    schedule.world_link = Some("https://vrchat.com/home/world/wrld_1".to_string());
    schedule.host = None;
    schedule.is_active = true;
    repo.update(&schedule).await?;

    let stored = repo.get_by_id(schedule.id).await?.unwrap();
    assert_eq!(stored.title, "Game Night");
    assert_eq!(
        stored.world_link.as_deref(),
        Some("https://vrchat.com/home/world/wrld_1")
    );
    assert_eq!(stored.host, None);
    assert!(stored.is_active);
    assert_eq!(stored.created_at, schedule.created_at);

    Ok(())
}

/// Tests marking an event ended.
///
/// Expected: Ok with has_ended set and is_active cleared
#[tokio::test]
async fn marks_event_ended() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScheduleRepository::new(db);
    let created = factory::create_schedule(db, "100").await?;
    let mut schedule = repo.get_by_id(created.id).await?.unwrap();

    schedule.is_active = false;
    schedule.has_ended = true;
    let updated = repo.update(&schedule).await?;

    assert!(updated.has_ended);
    assert!(!updated.is_active);

    Ok(())
}
