use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub space_id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// Embedded author document (`{"id": .., "nickname": ..}`)
    #[sea_orm(column_type = "JsonBinary")]
    pub author: Json,
    pub public_access: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
