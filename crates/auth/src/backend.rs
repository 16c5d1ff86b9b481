//! Concrete authentication backend
//!
//! Wraps `AuthConfig` and turns request credentials into an `AuthContext`.
//! Users are managed by the external identity provider, so no lookup happens
//! here beyond validating the token it issued.

use std::sync::Arc;

use axum::http::{header::AUTHORIZATION, HeaderMap};
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::{extract_bearer_token, validate_jwt_token};
use crate::types::AuthIdentity;

/// Concrete authentication backend.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthBackend {
    config: Arc<AuthConfig>,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Resolve the caller of a request.
    ///
    /// `Ok(None)` means anonymous (no `Authorization` header). A header that is
    /// present but malformed or carries an invalid token is an error, never
    /// silently downgraded to anonymous.
    pub fn current_user(&self, headers: &HeaderMap) -> Result<Option<AuthContext>, AuthError> {
        let Some(auth_header) = headers.get(AUTHORIZATION) else {
            return Ok(None);
        };

        let token = extract_bearer_token(auth_header)?;
        self.authenticate_jwt(&token).map(Some)
    }

    /// Validate a bearer token and build the caller's context
    pub fn authenticate_jwt(&self, token: &str) -> Result<AuthContext, AuthError> {
        let claims = validate_jwt_token(token, &self.config)?;

        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AuthError::InvalidUserId)?;

        Ok(AuthContext::new(AuthIdentity {
            id: user_id,
            email: claims.email,
        }))
    }
}
