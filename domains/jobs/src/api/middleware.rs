//! Jobs domain state and auth backend integration

use axum::extract::FromRef;
use jobboard_auth::AuthBackend;

use crate::repository::JobsRepositories;

/// Application state for the Jobs domain
#[derive(Clone)]
pub struct JobsState {
    pub repos: JobsRepositories,
    pub auth: AuthBackend,
}

impl JobsState {
    pub fn new(repos: JobsRepositories, auth: AuthBackend) -> Self {
        Self { repos, auth }
    }
}

impl FromRef<JobsState> for AuthBackend {
    fn from_ref(state: &JobsState) -> Self {
        state.auth.clone()
    }
}
