//! Route definitions for Jobs domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{applications, jobs};
use super::middleware::JobsState;

/// Create all Jobs domain API routes
pub fn routes() -> Router<JobsState> {
    Router::new()
        .route("/jobs/", get(jobs::list_jobs).post(jobs::create_job))
        .route(
            "/jobs/{id}/",
            get(jobs::get_job)
                .put(jobs::update_job)
                .patch(jobs::patch_job)
                .delete(jobs::delete_job),
        )
        .route("/jobs/{id}/apply/", post(applications::apply_to_job))
        .route(
            "/jobs/{id}/applications/",
            get(applications::list_applications),
        )
}
