use super::*;

/// Tests opening a ticket and attaching its thread.
///
/// Expected: Ok with an open ticket that gains a thread id
#[tokio::test]
async fn creates_open_ticket_then_sets_thread() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TicketRepository::new(db);
    let ticket = repo
        .create(CreateTicketParam {
            guild_id: 100,
            ticket_type: TicketType::IssueReport,
            creator_user_id: 11,
            creator_username: "alice".to_string(),
        })
        .await?;

    assert_eq!(ticket.status, TicketStatus::Open);
    assert_eq!(ticket.ticket_type, TicketType::IssueReport);
    assert_eq!(ticket.thread_id, None);

    let ticket = repo.set_thread_id(ticket.id, 555).await?;
    assert_eq!(ticket.thread_id, Some(555));

    Ok(())
}

/// Tests deleting a ticket removes its logged messages.
///
/// Expected: Ok with ticket and messages removed
#[tokio::test]
async fn delete_removes_messages() -> Result<(), AppError> {
    use sea_orm::{EntityTrait, PaginatorTrait};

    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ticket = factory::create_ticket(db, "100").await?;
    factory::create_ticket_message(db, ticket.id).await?;

    let repo = TicketRepository::new(db);
    assert_eq!(repo.delete(ticket.id).await?, 1);
    assert!(repo.get_by_id(ticket.id).await?.is_none());
    assert_eq!(entity::prelude::TicketMessage::find().count(db).await?, 0);

    Ok(())
}
