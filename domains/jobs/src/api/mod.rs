//! HTTP surface of the Jobs domain
//!
//! `routes()` exposes job post and application endpoints over `JobsState`.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use middleware::JobsState;
pub use routes::routes;
