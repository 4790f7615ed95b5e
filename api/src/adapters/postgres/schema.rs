//! Table bootstrap
//!
//! Creates the seed tables from the entity definitions when they are missing.
//! Tables are created parents first so every foreign key has a target.

use sea_orm::{ConnectionTrait, EntityName, EntityTrait, Schema};
use tracing::debug;

use crate::entity::{
    answers, comments, contest_participants, contests, notes, participant_qnas, problems,
    questions, tech_interviews,
};
use crate::error::DomainError;

async fn create_table<C, E>(db: &C, schema: &Schema, entity: E) -> Result<(), DomainError>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let backend = db.get_database_backend();
    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt))
        .await
        .map_err(|e| DomainError::Database(e.to_string()))?;

    debug!(table = entity.table_name(), "Ensured table");
    Ok(())
}

/// Create every seed table that does not exist yet
pub async fn ensure_schema<C: ConnectionTrait>(db: &C) -> Result<(), DomainError> {
    let schema = Schema::new(db.get_database_backend());

    create_table(db, &schema, tech_interviews::Entity).await?;
    create_table(db, &schema, questions::Entity).await?;
    create_table(db, &schema, participant_qnas::Entity).await?;
    create_table(db, &schema, comments::Entity).await?;
    create_table(db, &schema, contests::Entity).await?;
    create_table(db, &schema, contest_participants::Entity).await?;
    create_table(db, &schema, problems::Entity).await?;
    create_table(db, &schema, answers::Entity).await?;
    create_table(db, &schema, notes::Entity).await?;

    Ok(())
}
