//! Job board application composition root
//!
//! Builds domain state from configuration and composes the domain routers
//! into a single application.

use axum::{routing::get, Router};
use jobboard_auth::{AuthBackend, AuthConfig};
use jobboard_common::Config;
use jobboard_jobs::{JobsRepositories, JobsState};
use sqlx::{postgres::PgPoolOptions, PgPool};

pub const WELCOME_MESSAGE: &str = "Welcome to the Job Platform!";

/// Create the main application router with all routes
pub fn create_app(state: JobsState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/health", get(health_check))
        .merge(jobboard_jobs::routes().with_state(state))
}

/// Build the Jobs domain state.
///
/// Uses PostgreSQL when `DATABASE_URL` is set, otherwise an in-memory store.
pub async fn build_state(config: &Config) -> anyhow::Result<JobsState> {
    let repos = match &config.database_url {
        Some(url) => {
            let pool = connect(url, config.database_max_connections).await?;
            JobsRepositories::postgres(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory store");
            JobsRepositories::in_memory()
        }
    };

    Ok(JobsState::new(repos, AuthBackend::new(AuthConfig::from(config))))
}

/// Connect to PostgreSQL and apply pending migrations
#[mutants::skip] // Requires a live database
async fn connect(url: &str, max_connections: u32) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
        .map_err(|e| anyhow::anyhow!("Database connection failed: {}", e))?;

    tracing::info!("Database connection established");

    sqlx::migrate!("../../migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Database migration failed: {}", e))?;

    tracing::info!("Database migrations applied");

    Ok(pool)
}

async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
