//! PostgreSQL adapter for NoteRepository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryOrder, Set,
};
use uuid::Uuid;

use crate::domain::entities::{Author, Note, NoteId};
use crate::domain::ports::NoteRepository;
use crate::entity::notes;
use crate::error::DomainError;

/// PostgreSQL implementation of NoteRepository
pub struct PostgresNoteRepository<C = DatabaseConnection> {
    db: Arc<C>,
}

impl<C> PostgresNoteRepository<C> {
    pub fn new(db: Arc<C>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<C> NoteRepository for PostgresNoteRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_all(&self) -> Result<Vec<Note>, DomainError> {
        let results = notes::Entity::find()
            .order_by_asc(notes::Column::CreatedAt)
            .order_by_asc(notes::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        results.into_iter().map(Note::try_from).collect()
    }

    async fn save(&self, note: Note) -> Result<Note, DomainError> {
        if note.id.is_some() {
            return Ok(note);
        }

        let author = serde_json::to_value(&note.author)
            .map_err(|e| DomainError::Internal(format!("Failed to encode note author: {}", e)))?;

        let model = notes::ActiveModel {
            id: Set(Uuid::new_v4()),
            space_id: Set(note.space_id),
            title: Set(note.title),
            content: Set(note.content),
            author: Set(author),
            public_access: Set(note.public_access),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let result = model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Note::try_from(result)
    }
}

/// Convert SeaORM model to domain entity
impl TryFrom<notes::Model> for Note {
    type Error = DomainError;

    fn try_from(model: notes::Model) -> Result<Self, Self::Error> {
        let author: Author = serde_json::from_value(model.author).map_err(|e| {
            DomainError::Database(format!("Malformed author on note {}: {}", model.id, e))
        })?;

        Ok(Note {
            id: Some(NoteId(model.id)),
            space_id: model.space_id,
            title: model.title,
            content: model.content,
            author,
            public_access: model.public_access,
            created_at: Some(model.created_at.with_timezone(&Utc)),
        })
    }
}
