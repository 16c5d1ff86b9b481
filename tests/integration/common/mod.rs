//! Common test utilities and fixtures for integration tests
//!
//! This module provides shared infrastructure for all integration tests:
//! - Application setup against the in-memory store (or PostgreSQL when configured)
//! - Authentication helpers that mint bearer tokens
//! - Request builders and response parsing

use std::env;
use std::sync::Once;

use anyhow::Result;
use axum::{
    body::Body,
    http::{header::AUTHORIZATION, header::CONTENT_TYPE, Method, Request, Response, StatusCode},
    Router,
};
use jobboard_auth::{AuthBackend, AuthConfig};
use jobboard_jobs::{JobsRepositories, JobsState};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

static INIT: Once = Once::new();

pub const TEST_ISSUER: &str = "jobboard-test";
pub const TEST_AUDIENCE: &str = "authenticated";

/// Test environment configuration
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub database_url: Option<String>,
    pub jwt_secret: String,
}

impl TestConfig {
    pub fn from_env() -> Self {
        // Ensure test environment variables are loaded
        INIT.call_once(|| {
            dotenvy::from_filename(".env.test").ok();
        });

        Self {
            database_url: env::var("TEST_DATABASE_URL").ok(),
            jwt_secret: env::var("TEST_JWT_SECRET")
                .unwrap_or_else(|_| "test_secret_key_for_testing_only".to_string()),
        }
    }
}

/// Test application wired to fresh repositories
pub struct TestApp {
    pub state: JobsState,
    pub config: TestConfig,
}

impl TestApp {
    /// Application backed by a fresh in-memory store
    pub fn new() -> Self {
        Self::with_repos(JobsRepositories::in_memory())
    }

    pub fn with_repos(repos: JobsRepositories) -> Self {
        let config = TestConfig::from_env();
        let auth = AuthBackend::new(AuthConfig {
            jwt_secret: config.jwt_secret.clone(),
            issuer: Some(TEST_ISSUER.to_string()),
            audience: Some(TEST_AUDIENCE.to_string()),
        });

        Self {
            state: JobsState::new(repos, auth),
            config,
        }
    }

    /// Router with the same routes as the server binary
    pub fn router(&self) -> Router {
        jobboard_app::create_app(self.state.clone())
    }

    /// Send one request and return the status with the parsed JSON body (Null when empty)
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        (status, parse_body(response).await)
    }

    /// A user with a valid bearer token
    pub fn user(&self) -> UserFixture {
        UserFixture::new(&self.config.jwt_secret)
    }

    /// Create a job post as `user`, asserting success
    pub async fn create_job(&self, user: &UserFixture, title: &str) -> Value {
        let (status, body) = self
            .send(user.request(Method::POST, "/jobs/", Some(job_body(title))))
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
        body
    }
}

/// User fixture: an external identity and its bearer token
#[derive(Debug, Clone)]
pub struct UserFixture {
    pub id: Uuid,
    pub email: String,
    pub jwt_token: String,
}

impl UserFixture {
    pub fn new(secret: &str) -> Self {
        let id = Uuid::new_v4();
        let email = format!("test_{}@jobboard.test", id.simple());
        let jwt_token = create_test_jwt(id, &email, secret).unwrap();

        Self {
            id,
            email,
            jwt_token,
        }
    }

    /// Build a request carrying this user's bearer token
    pub fn request(&self, method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
        build_request(
            method,
            uri,
            Some(&format!("Bearer {}", self.jwt_token)),
            body,
        )
    }
}

/// Build an unauthenticated request
pub fn anonymous(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    build_request(method, uri, None, body)
}

/// Build a request with a raw `Authorization` header value
pub fn build_request(
    method: Method,
    uri: &str,
    authorization: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }

    match body {
        Some(b) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Parse a response body as JSON; empty bodies become `Value::Null`
pub async fn parse_body(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
}

/// A complete, valid job post body
pub fn job_body(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Design, build and operate backend services.",
        "company": "Acme Corp",
        "location": "Remote",
        "salary": "90k-120k",
    })
}

/// Create a test JWT for a user
pub fn create_test_jwt(user_id: Uuid, email: &str, secret: &str) -> Result<String> {
    sign_claims(
        json!({
            "sub": user_id.to_string(),
            "email": email,
            "iss": TEST_ISSUER,
            "aud": TEST_AUDIENCE,
        }),
        3600,
        secret,
    )
}

/// Sign arbitrary claims; `iat` and `exp` are filled in from `ttl_secs`
pub fn sign_claims(mut claims: Value, ttl_secs: i64, secret: &str) -> Result<String> {
    use jsonwebtoken::{Algorithm, EncodingKey, Header};

    let now = chrono::Utc::now().timestamp();
    claims["iat"] = json!(now);
    claims["exp"] = json!(now + ttl_secs);

    let header = Header::new(Algorithm::HS256);
    let encoding_key = EncodingKey::from_secret(secret.as_ref());

    Ok(jsonwebtoken::encode(&header, &claims, &encoding_key)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_creation() {
        let token = create_test_jwt(Uuid::new_v4(), "test@example.com", "test_secret").unwrap();
        assert!(!token.is_empty());
        assert_eq!(token.matches('.').count(), 2);
    }

    #[tokio::test]
    async fn test_fixture_token_is_accepted() {
        let app = TestApp::new();
        let user = app.user();

        let ctx = app
            .state
            .auth
            .authenticate_jwt(&user.jwt_token)
            .unwrap();
        assert_eq!(ctx.user_id(), user.id);
    }
}
