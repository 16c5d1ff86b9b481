//! Job application API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use jobboard_auth::AuthUser;
use jobboard_common::{JsonBody, Result};
use serde::Serialize;
use uuid::Uuid;

use super::jobs::load_job;
use crate::api::middleware::JobsState;
use crate::domain::entities::{JobApplication, JobApplicationFields};
use crate::domain::permissions::{authorize, Action, ResourceKind, Target};

/// Job application response DTO
#[derive(Debug, Serialize)]
pub struct JobApplicationResponse {
    pub id: Uuid,
    pub job_id: Uuid,
    pub applicant: Uuid,
    pub cover_letter: String,
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<JobApplication> for JobApplicationResponse {
    fn from(a: JobApplication) -> Self {
        Self {
            id: a.id,
            job_id: a.job_id,
            applicant: a.applicant,
            cover_letter: a.cover_letter,
            resume_url: a.resume_url,
            created_at: a.created_at,
        }
    }
}

/// Apply to a job post as the caller
pub async fn apply_to_job(
    AuthUser(ctx): AuthUser,
    State(state): State<JobsState>,
    Path(job_id): Path<Uuid>,
    body: JsonBody<JobApplicationFields>,
) -> Result<(StatusCode, Json<JobApplicationResponse>)> {
    let job = load_job(&state, job_id).await?;
    authorize(
        Action::Create,
        Target::collection(ResourceKind::JobApplication),
        Some(&ctx),
    )?;
    let fields = body.validate()?;

    let application = JobApplication::new(job.id, ctx.user_id(), fields);
    let created = state.repos.applications.create(&application).await?;

    tracing::info!(
        application_id = %created.id,
        job_id = %job_id,
        user_id = %ctx.user_id(),
        "Job application submitted"
    );

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// List the applications submitted against a job post
pub async fn list_applications(
    AuthUser(ctx): AuthUser,
    State(state): State<JobsState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<Vec<JobApplicationResponse>>> {
    authorize(
        Action::List,
        Target::collection(ResourceKind::JobApplication),
        Some(&ctx),
    )?;

    let applications = state.repos.applications.list_for_job(job_id).await?;
    Ok(Json(applications.into_iter().map(Into::into).collect()))
}
