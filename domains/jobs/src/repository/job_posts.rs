//! Job post repository (PostgreSQL)

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{write_error, JobPostRepository, RepositoryResult};
use crate::domain::entities::JobPost;

#[derive(Clone)]
pub struct PgJobPostRepository {
    pool: PgPool,
}

impl PgJobPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobPostRepository for PgJobPostRepository {
    async fn find(&self, id: Uuid) -> RepositoryResult<Option<JobPost>> {
        let row = sqlx::query_as::<_, JobPost>(
            r#"
            SELECT id, title, description, company, location, salary,
                   posted_by, created_at, updated_at
            FROM job_posts WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list(&self) -> RepositoryResult<Vec<JobPost>> {
        let rows = sqlx::query_as::<_, JobPost>(
            r#"
            SELECT id, title, description, company, location, salary,
                   posted_by, created_at, updated_at
            FROM job_posts
            ORDER BY created_at DESC, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn create(&self, job: &JobPost) -> RepositoryResult<JobPost> {
        let row = sqlx::query_as::<_, JobPost>(
            r#"
            INSERT INTO job_posts (id, title, description, company, location, salary,
                                   posted_by, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, title, description, company, location, salary,
                      posted_by, created_at, updated_at
            "#,
        )
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.company)
        .bind(&job.location)
        .bind(&job.salary)
        .bind(job.posted_by)
        .bind(job.created_at)
        .bind(job.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "job post"))?;
        Ok(row)
    }

    async fn update(&self, job: &JobPost) -> RepositoryResult<Option<JobPost>> {
        // posted_by and created_at are immutable and never written here
        let row = sqlx::query_as::<_, JobPost>(
            r#"
            UPDATE job_posts SET
                title = $2,
                description = $3,
                company = $4,
                location = $5,
                salary = $6,
                updated_at = $7
            WHERE id = $1
            RETURNING id, title, description, company, location, salary,
                      posted_by, created_at, updated_at
            "#,
        )
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.company)
        .bind(&job.location)
        .bind(&job.salary)
        .bind(job.updated_at)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        // job_applications rows go with it (ON DELETE CASCADE)
        let result = sqlx::query("DELETE FROM job_posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
