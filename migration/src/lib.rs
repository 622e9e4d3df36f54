pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_schedule_table;
mod m20250101_000002_create_attendance_table;
mod m20250101_000003_create_server_setting_table;
mod m20250215_000004_create_ticket_table;
mod m20250215_000005_create_ticket_message_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_schedule_table::Migration),
            Box::new(m20250101_000002_create_attendance_table::Migration),
            Box::new(m20250101_000003_create_server_setting_table::Migration),
            Box::new(m20250215_000004_create_ticket_table::Migration),
            Box::new(m20250215_000005_create_ticket_message_table::Migration),
        ]
    }
}
