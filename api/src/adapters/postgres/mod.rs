//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.
//! Repositories are generic over the connection so the same code runs on a
//! pooled connection or inside a transaction.

pub mod contest_repo;
pub mod note_repo;
pub mod question_repo;
pub mod schema;
pub mod tech_interview_repo;


use std::future::Future;
use std::sync::Arc;

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    IntoActiveModel, TransactionTrait,
};

pub use contest_repo::PostgresContestRepository;
pub use note_repo::PostgresNoteRepository;
pub use question_repo::PostgresQuestionRepository;
pub use schema::ensure_schema;
pub use tech_interview_repo::PostgresTechInterviewRepository;

use crate::app::{RandomSource, SeedOutcome, SeedService, SeedSettings};
use crate::config::Profile;
use crate::error::DomainError;

/// Rows per multi-row INSERT; keeps statements under the bind parameter limit
pub const INSERT_BATCH_SIZE: usize = 1000;

/// Insert new child rows in batches
pub(crate) async fn insert_batched<C, A>(db: &C, models: Vec<A>) -> Result<(), DomainError>
where
    C: ConnectionTrait,
    A: ActiveModelTrait + Clone + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    for batch in models.chunks(INSERT_BATCH_SIZE) {
        <A::Entity as EntityTrait>::insert_many(batch.to_vec())
            .exec_without_returning(db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;
    }
    Ok(())
}

/// Run `work` inside a transaction that it receives a handle to.
///
/// Commits when `work` succeeds and rolls back when it fails. `work` must not
/// keep the handle past its own future. A failed rollback is logged and the
/// error from `work` is returned unchanged.
pub async fn in_transaction<T, F, Fut>(db: &DatabaseConnection, work: F) -> Result<T, DomainError>
where
    F: FnOnce(Arc<DatabaseTransaction>) -> Fut,
    Fut: Future<Output = Result<T, DomainError>>,
{
    let txn = Arc::new(
        db.begin()
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?,
    );

    let result = work(txn.clone()).await;

    // A handle that is still shared rolls back when its last clone drops
    let txn = match Arc::try_unwrap(txn) {
        Ok(txn) => txn,
        Err(_) => {
            return result.and(Err(DomainError::Internal(
                "Transaction is still shared after its work finished".to_string(),
            )))
        }
    };

    match result {
        Ok(value) => {
            txn.commit()
                .await
                .map_err(|e| DomainError::Database(e.to_string()))?;
            Ok(value)
        }
        Err(e) => {
            tracing::warn!("Rolling back transaction: {}", e);
            if let Err(rollback) = txn.rollback().await {
                tracing::error!("Rollback failed: {}", rollback);
            }
            Err(e)
        }
    }
}

/// Run the seeder against PostgreSQL inside a single transaction.
///
/// Nothing is committed unless every family was written.
pub async fn seed_in_transaction<R>(
    db: &DatabaseConnection,
    profile: &Profile,
    settings: SeedSettings,
    rng: &mut R,
) -> Result<SeedOutcome, DomainError>
where
    R: RandomSource + Send,
{
    if !profile.allows_seeding() {
        tracing::info!("Seeding disabled for profile '{}'", profile);
        return Ok(SeedOutcome::Disabled);
    }

    in_transaction(db, |txn| async move {
        let service = SeedService::new(
            Arc::new(PostgresTechInterviewRepository::new(txn.clone())),
            Arc::new(PostgresQuestionRepository::new(txn.clone())),
            Arc::new(PostgresContestRepository::new(txn.clone())),
            Arc::new(PostgresNoteRepository::new(txn)),
            settings,
        );
        service.run_for_profile(profile, rng).await
    })
    .await
}
