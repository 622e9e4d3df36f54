use super::*;

/// Tests finding the open ticket for a thread.
///
/// Expected: Ok(Some) for an open ticket's thread
#[tokio::test]
async fn finds_open_ticket_by_thread() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ticket = TicketFactory::new(db, "100")
        .thread_id(Some("555".to_string()))
        .build()
        .await?;

    let found = TicketRepository::new(db)
        .get_open_by_thread(555)
        .await?
        .unwrap();
    assert_eq!(found.id, ticket.id);

    Ok(())
}

/// Tests that closed tickets are not returned for their thread.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_closed_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    TicketFactory::new(db, "100")
        .thread_id(Some("556".to_string()))
        .closed(Some("done".to_string()))
        .build()
        .await?;

    let found = TicketRepository::new(db).get_open_by_thread(556).await?;
    assert!(found.is_none());

    Ok(())
}
