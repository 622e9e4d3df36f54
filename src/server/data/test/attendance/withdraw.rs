use super::*;
use test_utils::factory::attendance::AttendanceFactory;

/// Tests withdrawing a signed-up member.
///
/// Expected: Ok(true) and the row removed
#[tokio::test]
async fn withdraws_signed_up_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let schedule = factory::create_schedule(db, "100").await?;
    AttendanceFactory::new(db, schedule.id)
        .user("11", "alice")
        .build()
        .await?;

    let repo = AttendanceRepository::new(db);
    let removed = repo.withdraw(schedule.id, 11).await?;

    assert!(removed);
    assert!(repo.find(schedule.id, 11).await?.is_none());

    Ok(())
}

/// Tests withdrawing a member who never signed up.
///
/// Expected: Ok(false)
#[tokio::test]
async fn withdrawing_absent_member_returns_false() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let schedule = factory::create_schedule(db, "100").await?;

    let removed = AttendanceRepository::new(db)
        .withdraw(schedule.id, 11)
        .await?;
    assert!(!removed);

    Ok(())
}
