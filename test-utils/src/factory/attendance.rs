//! Attendance factory for creating test sign-ups.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating attendance rows with customizable fields.
pub struct AttendanceFactory<'a> {
    db: &'a DatabaseConnection,
    schedule_id: i32,
    user_id: String,
    user_name: String,
}

impl<'a> AttendanceFactory<'a> {
    /// Creates a new AttendanceFactory with a unique user for `schedule_id`.
    pub fn new(db: &'a DatabaseConnection, schedule_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            schedule_id,
            user_id: format!("{}", 300_000_000 + id),
            user_name: format!("attendee{}", id),
        }
    }

    pub fn user(mut self, user_id: impl Into<String>, user_name: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self.user_name = user_name.into();
        self
    }

    /// Builds and inserts the attendance entity into the database.
    pub async fn build(self) -> Result<entity::attendance::Model, DbErr> {
        entity::attendance::ActiveModel {
            id: ActiveValue::NotSet,
            schedule_id: ActiveValue::Set(self.schedule_id),
            user_id: ActiveValue::Set(self.user_id),
            user_name: ActiveValue::Set(self.user_name),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Signs up a fresh user for the given event.
pub async fn create_attendance(
    db: &DatabaseConnection,
    schedule_id: i32,
) -> Result<entity::attendance::Model, DbErr> {
    AttendanceFactory::new(db, schedule_id).build().await
}
