//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let schedule = factory::create_schedule(&db, "100").await?;
//!     let attendee = factory::create_attendance(&db, schedule.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let schedule = factory::schedule::ScheduleFactory::new(&db, "100")
//!     .title("Movie Night")
//!     .has_ended(true)
//!     .build()
//!     .await?;
//! ```

pub mod attendance;
pub mod helpers;
pub mod schedule;
pub mod server_setting;
pub mod ticket;
pub mod ticket_message;

pub use attendance::create_attendance;
pub use schedule::create_schedule;
pub use server_setting::create_server_setting;
pub use ticket::create_ticket;
pub use ticket_message::create_ticket_message;
