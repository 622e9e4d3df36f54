use super::*;

/// Tests signing up a member for an event.
///
/// Expected: Ok with a new attendance row
#[tokio::test]
async fn signs_up_new_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let schedule = factory::create_schedule(db, "100").await?;

    let (attendance, created) = AttendanceRepository::new(db)
        .sign_up(CreateAttendanceParam {
            schedule_id: schedule.id,
            user_id: 11,
            user_name: "alice".to_string(),
        })
        .await?;

    assert!(created);
    assert_eq!(attendance.user_id, 11);
    assert_eq!(attendance.user_name, "alice");

    Ok(())
}

/// Tests that signing up twice keeps a single row.
///
/// Expected: Ok with created = false and the original row returned
#[tokio::test]
async fn second_sign_up_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let schedule = factory::create_schedule(db, "100").await?;
    let repo = AttendanceRepository::new(db);
    let param = CreateAttendanceParam {
        schedule_id: schedule.id,
        user_id: 11,
        user_name: "alice".to_string(),
    };

    let (first, _) = repo.sign_up(param.clone()).await?;
    let (second, created) = repo.sign_up(param).await?;

    assert!(!created);
    assert_eq!(first.id, second.id);
    assert_eq!(repo.count_by_schedule(schedule.id).await?, 1);

    Ok(())
}
