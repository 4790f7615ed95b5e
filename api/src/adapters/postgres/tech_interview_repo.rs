//! PostgreSQL adapter for TechInterviewRepository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{TechClass, TechInterview, TechInterviewId};
use crate::domain::ports::TechInterviewRepository;
use crate::entity::tech_interviews;
use crate::error::DomainError;

/// PostgreSQL implementation of TechInterviewRepository
pub struct PostgresTechInterviewRepository<C = DatabaseConnection> {
    db: Arc<C>,
}

impl<C> PostgresTechInterviewRepository<C> {
    pub fn new(db: Arc<C>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<C> TechInterviewRepository for PostgresTechInterviewRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_all(&self) -> Result<Vec<TechInterview>, DomainError> {
        let results = tech_interviews::Entity::find()
            .order_by_asc(tech_interviews::Column::CreatedAt)
            .order_by_asc(tech_interviews::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn save(&self, tech_interview: TechInterview) -> Result<TechInterview, DomainError> {
        if tech_interview.id.is_some() {
            return Ok(tech_interview);
        }

        let model = tech_interviews::ActiveModel {
            id: Set(Uuid::new_v4()),
            tech_class: Set(tech_interview.tech_class.to_string()),
            question: Set(tech_interview.question),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }
}

/// Convert SeaORM model to domain entity
impl From<tech_interviews::Model> for TechInterview {
    fn from(model: tech_interviews::Model) -> Self {
        TechInterview {
            id: Some(TechInterviewId(model.id)),
            tech_class: model.tech_class.parse().unwrap_or(TechClass::Java),
            question: model.question,
            created_at: Some(model.created_at.with_timezone(&Utc)),
        }
    }
}
