//! Tech Interview API Server
//!
//! Serves tech interview spaces and, outside production, fills an empty
//! database with interrelated development data on startup.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sea_orm::Database;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::postgres::{ensure_schema, seed_in_transaction, PostgresContestRepository};
use app::SeedOutcome;
use config::Config;
use domain::ports::ContestRepository;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub contest_repo: Arc<dyn ContestRepository>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        .route(
            "/api/v1/tech-interview/:space_id/contests",
            get(handlers::list_contests),
        )
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,techinterview_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tech Interview API...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Active profile: {}", config.profile);

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    ensure_schema(&db)
        .await
        .context("Failed to create tables")?;

    // Seed development data before accepting requests
    let mut rng = match config.seed_rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    match seed_in_transaction(&db, &config.profile, config.seed, &mut rng)
        .await
        .context("Failed to seed development data")?
    {
        SeedOutcome::Seeded(report) => tracing::info!(
            "Seeded {} answers across {} contests",
            report.answers,
            report.contests
        ),
        SeedOutcome::Skipped => tracing::info!("Existing data kept"),
        SeedOutcome::Disabled => {}
    }

    let state = AppState {
        contest_repo: Arc::new(PostgresContestRepository::new(Arc::new(db))),
    };
    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
