use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "problems")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub contest_id: Uuid,
    /// Index within the owning collection
    pub position: i32,
    pub tech_interview_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contests::Entity",
        from = "Column::ContestId",
        to = "super::contests::Column::Id"
    )]
    Contest,
    #[sea_orm(
        belongs_to = "super::tech_interviews::Entity",
        from = "Column::TechInterviewId",
        to = "super::tech_interviews::Column::Id"
    )]
    TechInterview,
    #[sea_orm(has_many = "super::answers::Entity")]
    Answers,
}

impl Related<super::contests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contest.def()
    }
}

impl Related<super::tech_interviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TechInterview.def()
    }
}

impl Related<super::answers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
