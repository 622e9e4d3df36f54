use sea_orm::DatabaseConnection;

use crate::server::{
    data::schedule::ScheduleRepository,
    error::AppError,
    model::schedule::{PaginatedSchedules, ScheduleFilter},
};

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of events matching the filter.
    ///
    /// # Arguments
    /// - `filter` - Query constraints
    /// - `page` - 1-based page number, must be at least 1
    /// - `per_page` - Events per page, must be at least 1
    ///
    /// # Returns
    /// - `Ok(PaginatedSchedules)` - Events on the page with totals
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        filter: &ScheduleFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedSchedules, AppError> {
        let page = page.max(1);
        let per_page = per_page.max(1);

        let (schedules, total) = ScheduleRepository::new(self.db)
            .get_paginated(filter, page - 1, per_page)
            .await?;

        Ok(PaginatedSchedules {
            schedules,
            page,
            per_page,
            total,
            total_pages: total.div_ceil(per_page),
        })
    }
}
