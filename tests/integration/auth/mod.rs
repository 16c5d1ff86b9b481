//! Authentication integration tests
//!
//! Bearer token handling as seen through the HTTP surface.

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use crate::common::{build_request, sign_claims, TestApp, TEST_AUDIENCE, TEST_ISSUER};

#[tokio::test]
async fn test_invalid_token_rejected_on_public_endpoint() {
    let app = TestApp::new();

    let (status, body) = app
        .send(build_request(
            Method::GET,
            "/jobs/",
            Some("Bearer not.a.jwt"),
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_non_bearer_scheme_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .send(build_request(
            Method::GET,
            "/jobs/",
            Some("Basic dXNlcjpwYXNz"),
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_AUTHORIZATION");
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::new();
    let token = sign_claims(
        json!({
            "sub": Uuid::new_v4().to_string(),
            "iss": TEST_ISSUER,
            "aud": TEST_AUDIENCE,
        }),
        -3600,
        &app.config.jwt_secret,
    )
    .unwrap();

    let (status, _) = app
        .send(build_request(
            Method::POST,
            "/jobs/",
            Some(&format!("Bearer {}", token)),
            Some(crate::common::job_body("Late")),
        ))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_rejected() {
    let app = TestApp::new();
    let token = sign_claims(
        json!({
            "sub": Uuid::new_v4().to_string(),
            "iss": TEST_ISSUER,
            "aud": TEST_AUDIENCE,
        }),
        3600,
        "some-other-secret",
    )
    .unwrap();

    let (status, body) = app
        .send(build_request(
            Method::GET,
            "/jobs/",
            Some(&format!("Bearer {}", token)),
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_wrong_issuer_rejected() {
    let app = TestApp::new();
    let token = sign_claims(
        json!({
            "sub": Uuid::new_v4().to_string(),
            "iss": "someone-else",
            "aud": TEST_AUDIENCE,
        }),
        3600,
        &app.config.jwt_secret,
    )
    .unwrap();

    let (status, _) = app
        .send(build_request(
            Method::GET,
            "/jobs/",
            Some(&format!("Bearer {}", token)),
            None,
        ))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_uuid_subject_rejected() {
    let app = TestApp::new();
    let token = sign_claims(
        json!({
            "sub": "user-42",
            "iss": TEST_ISSUER,
            "aud": TEST_AUDIENCE,
        }),
        3600,
        &app.config.jwt_secret,
    )
    .unwrap();

    let (status, body) = app
        .send(build_request(
            Method::GET,
            "/jobs/",
            Some(&format!("Bearer {}", token)),
            None,
        ))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_USER_ID");
}

#[tokio::test]
async fn test_welcome_and_health_are_plain_text() {
    let app = TestApp::new();

    let (status, body) = app
        .send(build_request(Method::GET, "/", None, None))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Welcome to the Job Platform!"));

    let (status, body) = app
        .send(build_request(Method::GET, "/health", None, None))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("OK"));
}
