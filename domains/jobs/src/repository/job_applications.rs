//! Job application repository (PostgreSQL)

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{write_error, JobApplicationRepository, RepositoryResult};
use crate::domain::entities::JobApplication;

#[derive(Clone)]
pub struct PgJobApplicationRepository {
    pool: PgPool,
}

impl PgJobApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobApplicationRepository for PgJobApplicationRepository {
    async fn create(&self, application: &JobApplication) -> RepositoryResult<JobApplication> {
        let row = sqlx::query_as::<_, JobApplication>(
            r#"
            INSERT INTO job_applications (id, job_id, applicant, cover_letter, resume_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, job_id, applicant, cover_letter, resume_url, created_at
            "#,
        )
        .bind(application.id)
        .bind(application.job_id)
        .bind(application.applicant)
        .bind(&application.cover_letter)
        .bind(&application.resume_url)
        .bind(application.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "job post"))?;
        Ok(row)
    }

    async fn list_for_job(&self, job_id: Uuid) -> RepositoryResult<Vec<JobApplication>> {
        let rows = sqlx::query_as::<_, JobApplication>(
            r#"
            SELECT id, job_id, applicant, cover_letter, resume_url, created_at
            FROM job_applications
            WHERE job_id = $1
            ORDER BY created_at ASC, id
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
