use super::*;

/// Tests listing open tickets of a guild newest first.
///
/// Expected: Ok with open tickets of the guild ordered by creation, newest first
#[tokio::test]
async fn lists_open_tickets_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_ticket_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = TicketFactory::new(db, "100")
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    let newer = TicketFactory::new(db, "100")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    TicketFactory::new(db, "100")
        .closed(None)
        .build()
        .await?;
    TicketFactory::new(db, "200").build().await?;

    let tickets = TicketRepository::new(db).get_open_by_guild(100).await?;
    let ids: Vec<i32> = tickets.iter().map(|t| t.id).collect();

    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}
