use super::*;
use test_utils::factory::schedule::ScheduleFactory;

/// Tests looking up an event by its announcement message.
///
/// Expected: Ok with the matching event
#[tokio::test]
async fn finds_event_by_message_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = ScheduleFactory::new(db, "100")
        .message_id(Some("123456".to_string()))
        .build()
        .await?;

    let found = ScheduleRepository::new(db)
        .get_by_message_id(100, 123456)
        .await?
        .unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.message_id, Some(123456));

    Ok(())
}

/// Tests that message lookups are scoped to the guild.
///
/// Expected: Ok(None) for a message in another guild
#[tokio::test]
async fn ignores_message_in_other_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    ScheduleFactory::new(db, "100")
        .message_id(Some("123457".to_string()))
        .build()
        .await?;

    let found = ScheduleRepository::new(db)
        .get_by_message_id(200, 123457)
        .await?;
    assert!(found.is_none());

    Ok(())
}
