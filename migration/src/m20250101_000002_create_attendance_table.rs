use sea_orm_migration::{prelude::*, schema::*};

use super::m20250101_000001_create_schedule_table::Schedule;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Attendance::Table)
                    .if_not_exists()
                    .col(pk_auto(Attendance::Id))
                    .col(integer(Attendance::ScheduleId))
                    .col(string(Attendance::UserId))
                    .col(string(Attendance::UserName))
                    .col(
                        timestamp(Attendance::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_attendance_schedule_id")
                            .from(Attendance::Table, Attendance::ScheduleId)
                            .to(Schedule::Table, Schedule::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One sign-up per user per event
        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_unique")
                    .table(Attendance::Table)
                    .col(Attendance::ScheduleId)
                    .col(Attendance::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_attendance_unique")
                    .table(Attendance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Attendance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Attendance {
    Table,
    Id,
    ScheduleId,
    UserId,
    UserName,
    CreatedAt,
}
