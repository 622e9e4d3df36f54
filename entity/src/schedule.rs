use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "schedule")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub message_id: Option<String>,
    pub channel_id: Option<String>,
    pub guild_id: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    pub host_id: Option<String>,
    pub host_name: Option<String>,
    pub host_url: String,
    pub world_link: Option<String>,
    pub image_url: Option<String>,
    #[sea_orm(unique)]
    pub role_id: String,
    pub is_active: bool,
    pub has_ended: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendance,
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
