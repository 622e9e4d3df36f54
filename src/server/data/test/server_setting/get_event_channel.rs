use super::*;

/// Tests reading the configured event channel.
///
/// Expected: Ok(Some) for a configured guild
#[tokio::test]
async fn returns_configured_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_server_setting(db, "100", Some("555".to_string())).await?;

    let channel = ServerSettingRepository::new(db)
        .get_event_channel(100)
        .await?;
    assert_eq!(channel, Some(555));

    Ok(())
}

/// Tests guilds with no setting or a setting without a channel.
///
/// Expected: Ok(None) in both cases
#[tokio::test]
async fn returns_none_when_unset() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_server_setting(db, "100", None).await?;

    let repo = ServerSettingRepository::new(db);
    assert_eq!(repo.get_event_channel(100).await?, None);
    assert_eq!(repo.get_event_channel(200).await?, None);

    Ok(())
}
