use super::*;

/// Tests creating a new event.
///
/// Verifies that the repository stores the event without an announcement and
/// with both lifecycle flags cleared.
///
/// Expected: Ok with event created
#[tokio::test]
async fn creates_unannounced_event() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScheduleRepository::new(db);
    let schedule = repo.create(create_param(100, 7001)).await?;

    assert_eq!(schedule.guild_id, 100);
    assert_eq!(schedule.title, "Movie Night");
    assert_eq!(schedule.role_id, 7001);
    assert_eq!(schedule.message_id, None);
    assert_eq!(schedule.channel_id, None);
    assert!(!schedule.is_active);
    assert!(!schedule.has_ended);
    assert_eq!(
        schedule.host,
        Some(EventHost {
            user_id: 42,
            name: "Host".to_string()
        })
    );

    Ok(())
}

/// Tests creating an event without a host.
///
/// Expected: Ok with host stored as None
#[tokio::test]
async fn creates_event_without_host() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScheduleRepository::new(db);
    let mut param = create_param(100, 7002);
    param.host = None;
    let schedule = repo.create(param).await?;

    let stored = repo.get_by_id(schedule.id).await?.unwrap();
    assert_eq!(stored.host, None);

    Ok(())
}

/// Tests recording the announcement message after posting.
///
/// Expected: Ok with channel and message ids set
#[tokio::test]
async fn sets_announcement_location() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScheduleRepository::new(db);
    let schedule = repo.create(create_param(100, 7003)).await?;
    let updated = repo.set_announcement(schedule.id, 555, 999).await?;

    assert_eq!(updated.channel_id, Some(555));
    assert_eq!(updated.message_id, Some(999));
    assert_eq!(updated.title, schedule.title);

    Ok(())
}

/// Tests that event creation runs inside a transaction.
///
/// Verifies that a rolled back transaction leaves no event behind.
///
/// Expected: Ok with no events after rollback
#[tokio::test]
async fn create_inside_rolled_back_transaction_is_discarded() -> Result<(), AppError> {
    use sea_orm::TransactionTrait;

    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let txn = db.begin().await?;
    ScheduleRepository::new(&txn)
        .create(create_param(100, 7004))
        .await?;
    txn.rollback().await?;

    let remaining = ScheduleRepository::new(db).get_unended_by_guild(100).await?;
    assert!(remaining.is_empty());

    Ok(())
}
