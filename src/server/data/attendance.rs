use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::attendance::{Attendance, CreateAttendanceParam},
};

pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Signs a member up for an event unless they already are.
    ///
    /// # Returns
    /// - `Ok((Attendance, true))`: A new sign-up was recorded
    /// - `Ok((Attendance, false))`: The member was already signed up
    /// - `Err(AppError)`: Database error
    pub async fn sign_up(
        &self,
        param: CreateAttendanceParam,
    ) -> Result<(Attendance, bool), AppError> {
        if let Some(existing) = self.find(param.schedule_id, param.user_id).await? {
            return Ok((existing, false));
        }

        let entity = entity::attendance::ActiveModel {
            schedule_id: ActiveValue::Set(param.schedule_id),
            user_id: ActiveValue::Set(param.user_id.to_string()),
            user_name: ActiveValue::Set(param.user_name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((Attendance::from_entity(entity)?, true))
    }

    pub async fn find(
        &self,
        schedule_id: i32,
        user_id: u64,
    ) -> Result<Option<Attendance>, AppError> {
        entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::ScheduleId.eq(schedule_id))
            .filter(entity::attendance::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?
            .map(Attendance::from_entity)
            .transpose()
    }

    /// Removes a member's sign-up.
    ///
    /// # Returns
    /// - `Ok(true)`: A sign-up was removed
    /// - `Ok(false)`: The member was not signed up
    pub async fn withdraw(&self, schedule_id: i32, user_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::Attendance::delete_many()
            .filter(entity::attendance::Column::ScheduleId.eq(schedule_id))
            .filter(entity::attendance::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Gets everyone signed up for an event in sign-up order.
    pub async fn get_by_schedule(&self, schedule_id: i32) -> Result<Vec<Attendance>, AppError> {
        let entities = entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::ScheduleId.eq(schedule_id))
            .order_by_asc(entity::attendance::Column::CreatedAt)
            .order_by_asc(entity::attendance::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Attendance::from_entity).collect()
    }

    pub async fn count_by_schedule(&self, schedule_id: i32) -> Result<u64, AppError> {
        let count = entity::prelude::Attendance::find()
            .filter(entity::attendance::Column::ScheduleId.eq(schedule_id))
            .count(self.db)
            .await?;
        Ok(count)
    }
}
