use super::*;
use test_utils::factory::ticket_message::create_ticket_message_at;

/// Tests reading a ticket's transcript.
///
/// Verifies chronological order regardless of insertion order and that messages of
/// other tickets are excluded.
///
/// Expected: Ok with messages oldest first
#[tokio::test]
async fn returns_messages_in_chronological_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ticket = factory::create_ticket(db, "100").await?;
    let other = factory::create_ticket(db, "100").await?;
    let now = Utc::now();

    create_ticket_message_at(db, ticket.id, "second", now).await?;
    create_ticket_message_at(db, ticket.id, "first", now - Duration::minutes(5)).await?;
    create_ticket_message_at(db, other.id, "elsewhere", now).await?;

    let messages = TicketMessageRepository::new(db)
        .get_by_ticket(ticket.id)
        .await?;
    let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();

    assert_eq!(contents, vec!["first", "second"]);

    Ok(())
}
