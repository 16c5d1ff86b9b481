//! Repository interfaces and implementations for the Jobs domain
//!
//! Handlers only see the traits below. `PgJobPostRepository` and
//! `PgJobApplicationRepository` back them with PostgreSQL; `InMemoryStore`
//! implements both for tests and database-less local runs.

pub mod job_applications;
pub mod job_posts;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use jobboard_common::RepositoryError;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{JobApplication, JobPost};

pub use job_applications::PgJobApplicationRepository;
pub use job_posts::PgJobPostRepository;
pub use memory::InMemoryStore;

pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Storage for job posts
#[async_trait]
pub trait JobPostRepository: Send + Sync {
    /// Find a job post by ID
    async fn find(&self, id: Uuid) -> RepositoryResult<Option<JobPost>>;

    /// All job posts, newest first
    async fn list(&self) -> RepositoryResult<Vec<JobPost>>;

    /// Persist a new job post
    async fn create(&self, job: &JobPost) -> RepositoryResult<JobPost>;

    /// Overwrite a stored job post; `None` if it no longer exists
    async fn update(&self, job: &JobPost) -> RepositoryResult<Option<JobPost>>;

    /// Delete a job post and its applications; `false` if it did not exist
    async fn delete(&self, id: Uuid) -> RepositoryResult<bool>;
}

/// Storage for job applications
#[async_trait]
pub trait JobApplicationRepository: Send + Sync {
    /// Persist a new application.
    ///
    /// Fails with `RepositoryError::MissingReference` when the job post does not exist.
    async fn create(&self, application: &JobApplication) -> RepositoryResult<JobApplication>;

    /// Applications whose job reference is `job_id`, oldest first
    async fn list_for_job(&self, job_id: Uuid) -> RepositoryResult<Vec<JobApplication>>;
}

/// Combined repository access for the Jobs domain
#[derive(Clone)]
pub struct JobsRepositories {
    pub job_posts: Arc<dyn JobPostRepository>,
    pub applications: Arc<dyn JobApplicationRepository>,
}

impl JobsRepositories {
    /// PostgreSQL-backed repositories
    #[mutants::skip] // Only wires constructors; exercised against a live database
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            job_posts: Arc::new(PgJobPostRepository::new(pool.clone())),
            applications: Arc::new(PgJobApplicationRepository::new(pool)),
        }
    }

    /// Repositories sharing one in-memory store
    pub fn in_memory() -> Self {
        Self::from_store(InMemoryStore::default())
    }

    pub fn from_store(store: InMemoryStore) -> Self {
        Self {
            job_posts: Arc::new(store.clone()),
            applications: Arc::new(store),
        }
    }
}

/// Map a failed write onto the repository error taxonomy
pub(crate) fn write_error(err: sqlx::Error, reference: &'static str) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_foreign_key_violation() {
            return RepositoryError::MissingReference(reference);
        }
        if db_err.is_unique_violation() {
            return RepositoryError::AlreadyExists;
        }
    }
    RepositoryError::Connection(err)
}
