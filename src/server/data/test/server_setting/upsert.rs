use super::*;

/// Tests creating a setting for a guild without one.
///
/// Expected: Ok with the channel stored
#[tokio::test]
async fn inserts_new_setting() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setting = ServerSettingRepository::new(db)
        .upsert(UpsertServerSettingParam {
            guild_id: 100,
            channel_id: 555,
        })
        .await?;

    assert_eq!(setting.guild_id, 100);
    assert_eq!(setting.channel_id, Some(555));

    Ok(())
}

/// Tests replacing an existing guild's channel.
///
/// Verifies that the same row is updated rather than a second one inserted.
///
/// Expected: Ok with the new channel on the original row
#[tokio::test]
async fn updates_existing_setting() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_event_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_server_setting(db, "100", Some("555".to_string())).await?;

    let setting = ServerSettingRepository::new(db)
        .upsert(UpsertServerSettingParam {
            guild_id: 100,
            channel_id: 777,
        })
        .await?;

    assert_eq!(setting.id, existing.id);
    assert_eq!(setting.channel_id, Some(777));

    Ok(())
}
