//! Note domain entity
//!
//! A study note in a space. Notes stand alone; the author is embedded rather
//! than referenced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

entity_id!(
    /// Unique identifier for a note
    NoteId
);

/// Author details embedded in a note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i64,
    pub nickname: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Note {
    pub id: Option<NoteId>,
    pub space_id: i64,
    pub title: String,
    pub content: String,
    pub author: Author,
    /// Visible to everyone in the space when true
    pub public_access: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl Note {
    pub fn new(
        space_id: i64,
        title: impl Into<String>,
        content: impl Into<String>,
        author: Author,
        public_access: bool,
    ) -> Self {
        Self {
            id: None,
            space_id,
            title: title.into(),
            content: content.into(),
            author,
            public_access,
            created_at: None,
        }
    }
}
