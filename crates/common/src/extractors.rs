//! Custom axum extractors for the job board

use std::marker::PhantomData;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, rejection::JsonRejection, FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{Error, FieldErrors};

/// JSON extractor that validates the deserialized value automatically.
///
/// Replaces `Json<T>` + manual `.validate()` calls in handlers.
/// Requires `T: DeserializeOwned + Validate`.
///
/// All input errors (deserialization + validation) return 400.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

/// Rejection type for `ValidatedJson`:
/// - JSON deserialization errors → 400 (via `Error::Validation`)
/// - Validation errors → 400 with per-field messages (via `Error::InvalidFields`)
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    Json(JsonRejection),
    Validation(Error),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        match self {
            ValidatedJsonRejection::Json(e) => Error::Validation(e.body_text()).into_response(),
            ValidatedJsonRejection::Validation(e) => e.into_response(),
        }
    }
}

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::Json)?;
        let value = check(value).map_err(ValidatedJsonRejection::Validation)?;
        Ok(ValidatedJson(value))
    }
}

/// JSON body whose parsing and validation are deferred to the handler.
///
/// For endpoints where existence (404) and permission (403) checks must win
/// over a malformed body: the handler loads and authorizes first, then calls
/// [`JsonBody::validate`]. Same 400 semantics as `ValidatedJson`.
#[derive(Debug)]
pub struct JsonBody<T> {
    bytes: Bytes,
    json_content_type: bool,
    _target: PhantomData<fn() -> T>,
}

impl<T> JsonBody<T>
where
    T: DeserializeOwned + Validate,
{
    /// Wrap a raw body; `json_content_type` records whether the request declared JSON
    pub fn new(bytes: impl Into<Bytes>, json_content_type: bool) -> Self {
        Self {
            bytes: bytes.into(),
            json_content_type,
            _target: PhantomData,
        }
    }

    /// Deserialize and validate the body
    pub fn validate(self) -> Result<T, Error> {
        if !self.json_content_type {
            return Err(Error::Validation(
                "Expected request with `Content-Type: application/json`".to_string(),
            ));
        }

        let Json(value) =
            Json::<T>::from_bytes(&self.bytes).map_err(|e| Error::Validation(e.body_text()))?;
        check(value)
    }
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = BytesRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json_content_type = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await?;
        Ok(Self::new(bytes, json_content_type))
    }
}

/// `application/json` or any `+json` media type
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

fn check<T: Validate>(value: T) -> Result<T, Error> {
    value
        .validate()
        .map_err(|e| Error::InvalidFields(field_errors(&e)))?;
    Ok(value)
}

/// Flatten `validator` output into field name → messages
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let messages = errs.iter().map(describe).collect();
            (field.to_string(), messages)
        })
        .collect()
}

fn describe(error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    let param = |name: &str| error.params.get(name).map(|v| v.to_string());
    match error.code.as_ref() {
        "length" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => format!("must be between {min} and {max} characters"),
            (Some(min), None) => format!("must be at least {min} characters"),
            (None, Some(max)) => format!("must be at most {max} characters"),
            (None, None) => "has an invalid length".to_string(),
        },
        "url" => "must be a valid URL".to_string(),
        code => format!("is invalid ({code})"),
    }
}
