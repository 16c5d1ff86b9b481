//! Jobs domain: job posts, applications, permissions

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::*;
pub use domain::permissions::{
    authorize, evaluate, Action, Decision, Denial, Owned, ResourceKind, Target,
};

// Re-export repository types
pub use repository::{
    InMemoryStore, JobApplicationRepository, JobPostRepository, JobsRepositories,
    PgJobApplicationRepository, PgJobPostRepository,
};

// Re-export API types
pub use api::routes;
pub use api::JobsState;
