use super::*;

/// Tests closing an open ticket with a reason.
///
/// Expected: Ok(Some) with status closed, a close time and the reason
#[tokio::test]
async fn closes_open_ticket() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ticket = factory::create_ticket(db, "100").await?;

    let closed = TicketRepository::new(db)
        .close(ticket.id, Some("resolved".to_string()))
        .await?
        .unwrap();

    assert_eq!(closed.status, TicketStatus::Closed);
    assert!(closed.closed_at.is_some());
    assert_eq!(closed.closure_reason.as_deref(), Some("resolved"));

    Ok(())
}

/// Tests that closing an already closed ticket changes nothing.
///
/// Expected: Ok(None) with the original reason kept
#[tokio::test]
async fn closing_twice_is_noop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ticket = TicketFactory::new(db, "100")
        .closed(Some("first".to_string()))
        .build()
        .await?;

    let repo = TicketRepository::new(db);
    let result = repo.close(ticket.id, Some("second".to_string())).await?;

    assert!(result.is_none());
    let stored = repo.get_by_id(ticket.id).await?.unwrap();
    assert_eq!(stored.closure_reason.as_deref(), Some("first"));

    Ok(())
}
