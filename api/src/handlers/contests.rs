//! Contest handlers
//!
//! Read-only listing of the contests in a tech interview space.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::domain::entities::Contest;
use crate::error::AppError;
use crate::AppState;

/// Response for listing contests
#[derive(Debug, Serialize)]
pub struct ContestResponse {
    pub id: String,
    pub title: String,
    pub timeout_millis: i64,
    pub submit: String,
    pub participant_count: usize,
    pub problem_count: usize,
    pub answer_count: usize,
}

impl From<Contest> for ContestResponse {
    fn from(contest: Contest) -> Self {
        Self {
            id: contest.id.map(|id| id.to_string()).unwrap_or_default(),
            title: contest.title,
            timeout_millis: contest.timeout_millis,
            submit: contest.submit.to_string(),
            participant_count: contest.participants.len(),
            problem_count: contest.problems.len(),
            answer_count: contest.answers.len(),
        }
    }
}

/// GET /api/v1/tech-interview/:space_id/contests
///
/// List the contests of a space with the size of each collection.
pub async fn list_contests(
    State(state): State<AppState>,
    Path(space_id): Path<i64>,
) -> Result<Json<Vec<ContestResponse>>, AppError> {
    if space_id <= 0 {
        return Err(AppError::BadRequest(format!(
            "Space id must be positive, got {}",
            space_id
        )));
    }

    let contests = state.contest_repo.find_by_space(space_id).await?;
    tracing::debug!("Listing {} contests for space {}", contests.len(), space_id);

    Ok(Json(contests.into_iter().map(ContestResponse::from).collect()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::test_utils::{test_contest_in_space, InMemoryContestRepository};
    use crate::{build_router, AppState};

    fn server(repo: InMemoryContestRepository) -> TestServer {
        let state = AppState {
            contest_repo: Arc::new(repo),
        };
        TestServer::new(build_router(state)).unwrap()
    }

    #[tokio::test]
    async fn lists_contests_of_the_space_only() {
        let repo = InMemoryContestRepository::new()
            .with_contest(test_contest_in_space(1, 3, 2))
            .with_contest(test_contest_in_space(1, 1, 1))
            .with_contest(test_contest_in_space(2, 5, 5));

        let response = server(repo).get("/api/v1/tech-interview/1/contests").await;
        response.assert_status_ok();

        let body: Vec<Value> = response.json();
        assert_eq!(body.len(), 2);
        assert_eq!(body[0]["participant_count"], 3);
        assert_eq!(body[0]["problem_count"], 2);
        assert_eq!(body[0]["answer_count"], 6);
        assert_eq!(body[0]["submit"], "in_progress");
        assert_eq!(body[1]["answer_count"], 1);
    }

    #[tokio::test]
    async fn empty_space_returns_empty_list() {
        let response = server(InMemoryContestRepository::new())
            .get("/api/v1/tech-interview/42/contests")
            .await;
        response.assert_status_ok();

        let body: Vec<Value> = response.json();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn non_positive_space_id_is_rejected() {
        let response = server(InMemoryContestRepository::new())
            .get("/api/v1/tech-interview/0/contests")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_numeric_space_id_is_rejected() {
        let response = server(InMemoryContestRepository::new())
            .get("/api/v1/tech-interview/abc/contests")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
