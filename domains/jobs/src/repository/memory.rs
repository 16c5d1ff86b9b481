//! In-memory implementation of the Jobs repositories
//!
//! Mirrors the PostgreSQL schema's guarantees: the application → job post
//! foreign key, cascade on delete, and listing order.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use jobboard_common::RepositoryError;
use uuid::Uuid;

use super::{JobApplicationRepository, JobPostRepository, RepositoryResult};
use crate::domain::entities::{JobApplication, JobPost};

#[derive(Debug, Default)]
struct Tables {
    job_posts: HashMap<Uuid, JobPost>,
    applications: Vec<JobApplication>,
}

/// Shared in-memory store; clones see the same data
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| RepositoryError::Unavailable("in-memory store lock poisoned".to_string()))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| RepositoryError::Unavailable("in-memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl JobPostRepository for InMemoryStore {
    async fn find(&self, id: Uuid) -> RepositoryResult<Option<JobPost>> {
        Ok(self.read()?.job_posts.get(&id).cloned())
    }

    async fn list(&self) -> RepositoryResult<Vec<JobPost>> {
        let mut jobs: Vec<JobPost> = self.read()?.job_posts.values().cloned().collect();
        jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(jobs)
    }

    async fn create(&self, job: &JobPost) -> RepositoryResult<JobPost> {
        let mut tables = self.write()?;
        if tables.job_posts.contains_key(&job.id) {
            return Err(RepositoryError::AlreadyExists);
        }
        tables.job_posts.insert(job.id, job.clone());
        Ok(job.clone())
    }

    async fn update(&self, job: &JobPost) -> RepositoryResult<Option<JobPost>> {
        let mut tables = self.write()?;
        let Some(stored) = tables.job_posts.get_mut(&job.id) else {
            return Ok(None);
        };

        // Same columns as the SQL UPDATE: owner and creation time stay put
        stored.title = job.title.clone();
        stored.description = job.description.clone();
        stored.company = job.company.clone();
        stored.location = job.location.clone();
        stored.salary = job.salary.clone();
        stored.updated_at = job.updated_at;
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<bool> {
        let mut tables = self.write()?;
        if tables.job_posts.remove(&id).is_none() {
            return Ok(false);
        }
        tables.applications.retain(|a| a.job_id != id);
        Ok(true)
    }
}

#[async_trait]
impl JobApplicationRepository for InMemoryStore {
    async fn create(&self, application: &JobApplication) -> RepositoryResult<JobApplication> {
        let mut tables = self.write()?;
        if !tables.job_posts.contains_key(&application.job_id) {
            return Err(RepositoryError::MissingReference("job post"));
        }
        if tables.applications.iter().any(|a| a.id == application.id) {
            return Err(RepositoryError::AlreadyExists);
        }
        tables.applications.push(application.clone());
        Ok(application.clone())
    }

    async fn list_for_job(&self, job_id: Uuid) -> RepositoryResult<Vec<JobApplication>> {
        // Vec keeps insertion order, which is creation order
        Ok(self
            .read()?
            .applications
            .iter()
            .filter(|a| a.job_id == job_id)
            .cloned()
            .collect())
    }
}
