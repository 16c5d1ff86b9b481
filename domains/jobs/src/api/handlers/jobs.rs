//! Job post API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use jobboard_auth::{AuthUser, MaybeAuth};
use jobboard_common::{Error, JsonBody, Result, ValidatedJson};
use serde::Serialize;
use uuid::Uuid;

use crate::api::middleware::JobsState;
use crate::domain::entities::{JobPost, JobPostFields, JobPostPatch};
use crate::domain::permissions::{authorize, Action, Owned, ResourceKind, Target};

/// Job post response DTO
#[derive(Debug, Serialize)]
pub struct JobPostResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub salary: Option<String>,
    pub posted_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<JobPost> for JobPostResponse {
    fn from(j: JobPost) -> Self {
        Self {
            id: j.id,
            title: j.title,
            description: j.description,
            company: j.company,
            location: j.location,
            salary: j.salary,
            posted_by: j.posted_by,
            created_at: j.created_at,
            updated_at: j.updated_at,
        }
    }
}

pub(crate) async fn load_job(state: &JobsState, id: Uuid) -> Result<JobPost> {
    state
        .repos
        .job_posts
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Job post not found".to_string()))
}

/// Persist an owner-authorized change; the post may have vanished since it was loaded
async fn save_job(state: &JobsState, job: &JobPost) -> Result<JobPost> {
    state
        .repos
        .job_posts
        .update(job)
        .await?
        .ok_or_else(|| Error::NotFound("Job post not found".to_string()))
}

/// List all job posts, newest first
pub async fn list_jobs(
    auth: MaybeAuth,
    State(state): State<JobsState>,
) -> Result<Json<Vec<JobPostResponse>>> {
    authorize(
        Action::List,
        Target::collection(ResourceKind::JobPost),
        auth.context(),
    )?;

    let jobs = state.repos.job_posts.list().await?;
    Ok(Json(jobs.into_iter().map(Into::into).collect()))
}

/// Create a job post owned by the caller
pub async fn create_job(
    AuthUser(ctx): AuthUser,
    State(state): State<JobsState>,
    ValidatedJson(fields): ValidatedJson<JobPostFields>,
) -> Result<(StatusCode, Json<JobPostResponse>)> {
    authorize(
        Action::Create,
        Target::collection(ResourceKind::JobPost),
        Some(&ctx),
    )?;

    let job = JobPost::new(ctx.user_id(), fields);
    let created = state.repos.job_posts.create(&job).await?;

    tracing::info!(job_id = %created.id, user_id = %ctx.user_id(), "Job post created");

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Get a single job post by ID
pub async fn get_job(
    auth: MaybeAuth,
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobPostResponse>> {
    let job = load_job(&state, id).await?;
    authorize(Action::Read, job.target(), auth.context())?;

    Ok(Json(job.into()))
}

/// Replace every writable field of a job post (owner only)
pub async fn update_job(
    AuthUser(ctx): AuthUser,
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
    body: JsonBody<JobPostFields>,
) -> Result<Json<JobPostResponse>> {
    let mut job = load_job(&state, id).await?;
    authorize(Action::Write, job.target(), Some(&ctx))?;
    let fields = body.validate()?;

    job.replace(fields);
    let updated = save_job(&state, &job).await?;

    tracing::info!(job_id = %id, user_id = %ctx.user_id(), "Job post updated");

    Ok(Json(updated.into()))
}

/// Update the fields present in the body (owner only)
pub async fn patch_job(
    AuthUser(ctx): AuthUser,
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
    body: JsonBody<JobPostPatch>,
) -> Result<Json<JobPostResponse>> {
    let mut job = load_job(&state, id).await?;
    authorize(Action::Write, job.target(), Some(&ctx))?;
    let patch = body.validate()?;

    if patch.is_empty() {
        return Ok(Json(job.into()));
    }

    job.apply(patch);
    let updated = save_job(&state, &job).await?;

    tracing::info!(job_id = %id, user_id = %ctx.user_id(), "Job post patched");

    Ok(Json(updated.into()))
}

/// Delete a job post and its applications (owner only)
pub async fn delete_job(
    AuthUser(ctx): AuthUser,
    State(state): State<JobsState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let job = load_job(&state, id).await?;
    authorize(Action::Write, job.target(), Some(&ctx))?;

    if !state.repos.job_posts.delete(id).await? {
        return Err(Error::NotFound("Job post not found".to_string()));
    }

    tracing::info!(job_id = %id, user_id = %ctx.user_id(), "Job post deleted");

    Ok(StatusCode::NO_CONTENT)
}
