use super::*;

/// Tests logging a message to a ticket.
///
/// Expected: Ok with the message stored and counted
#[tokio::test]
async fn logs_message() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ticket = factory::create_ticket(db, "100").await?;

    let repo = TicketMessageRepository::new(db);
    let message = repo
        .create(CreateTicketMessageParam {
            ticket_id: ticket.id,
            sender_user_id: 11,
            sender_username: "alice".to_string(),
            content: "hello".to_string(),
            timestamp: Utc::now(),
        })
        .await?;

    assert_eq!(message.ticket_id, ticket.id);
    assert_eq!(message.sender_user_id, 11);
    assert_eq!(message.content, "hello");
    assert_eq!(repo.count_by_ticket(ticket.id).await?, 1);

    Ok(())
}
