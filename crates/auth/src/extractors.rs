//! Axum extractors for authentication
//!
//! Generic over any state `S` where `AuthBackend: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};

use crate::backend::AuthBackend;
use crate::context::AuthContext;
use crate::error::AuthError;

/// Authenticated user extractor; rejects anonymous requests with 401
#[derive(Debug)]
pub struct AuthUser(pub AuthContext);

impl<S> FromRequestParts<S> for AuthUser
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);

        let auth_context = backend
            .current_user(&parts.headers)?
            .ok_or(AuthError::MissingAuthorization)?;

        Ok(AuthUser(auth_context))
    }
}

/// Optional-auth extractor for public endpoints.
///
/// Yields `None` for anonymous callers. Credentials that are sent but invalid
/// are still rejected with 401.
#[derive(Debug)]
pub struct MaybeAuth(pub Option<AuthContext>);

impl MaybeAuth {
    pub fn context(&self) -> Option<&AuthContext> {
        self.0.as_ref()
    }
}

impl<S> FromRequestParts<S> for MaybeAuth
where
    AuthBackend: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let backend = AuthBackend::from_ref(state);
        Ok(MaybeAuth(backend.current_user(&parts.headers)?))
    }
}
