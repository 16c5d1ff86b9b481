//! Authentication middleware for the job board API
//!
//! Identity is issued by an external provider as HS256 bearer tokens. This crate
//! validates them and exposes axum extractors that work with any domain state
//! implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod error;
mod extractors;
mod jwt;
mod types;

pub use backend::AuthBackend;
pub use claims::AccessClaims;
pub use config::AuthConfig;
pub use context::AuthContext;
pub use error::AuthError;
pub use extractors::{AuthUser, MaybeAuth};
pub use types::AuthIdentity;
