use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub space_id: i64,
    pub author_id: i64,
    pub author_nickname: String,
    pub tech_interview_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tech_interviews::Entity",
        from = "Column::TechInterviewId",
        to = "super::tech_interviews::Column::Id"
    )]
    TechInterview,
    #[sea_orm(has_many = "super::participant_qnas::Entity")]
    Participants,
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
}

impl Related<super::tech_interviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TechInterview.def()
    }
}

impl Related<super::participant_qnas::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participants.def()
    }
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
