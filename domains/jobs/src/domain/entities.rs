//! Domain entities for the Jobs domain
//!
//! Job posts and the applications submitted against them, together with the
//! validated field sets clients are allowed to write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Reject values that are empty once surrounding whitespace is removed
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Optional free-text fields store `None` rather than an empty string
fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Distinguish an explicit `null` (`Some(None)`) from an absent field (`None`)
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Client-writable fields of a job post.
///
/// Used for creation and for full (PUT) updates; `id`, `posted_by` and the
/// timestamps are never accepted from the client.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct JobPostFields {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub title: String,

    #[validate(length(min = 1, max = 10000), custom(function = "not_blank"))]
    pub description: String,

    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub company: String,

    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub location: String,

    #[validate(length(max = 100))]
    #[serde(default)]
    pub salary: Option<String>,
}

/// Partial (PATCH) update of a job post; absent fields are left untouched.
///
/// `salary` set to `null` or an empty string clears it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct JobPostPatch {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 10000), custom(function = "not_blank"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub company: Option<String>,

    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub location: Option<String>,

    #[validate(length(max = 100))]
    #[serde(default, deserialize_with = "double_option")]
    pub salary: Option<Option<String>>,
}

impl JobPostPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Job post entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobPost {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub company: String,
    pub location: String,
    pub salary: Option<String>,
    /// Owning user; set once at creation
    pub posted_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl JobPost {
    /// Create a new job post owned by `posted_by`
    pub fn new(posted_by: Uuid, fields: JobPostFields) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: fields.title.trim().to_string(),
            description: fields.description,
            company: fields.company.trim().to_string(),
            location: fields.location.trim().to_string(),
            salary: normalize_optional(fields.salary),
            posted_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every writable field (PUT semantics)
    pub fn replace(&mut self, fields: JobPostFields) {
        self.title = fields.title.trim().to_string();
        self.description = fields.description;
        self.company = fields.company.trim().to_string();
        self.location = fields.location.trim().to_string();
        self.salary = normalize_optional(fields.salary);
        self.updated_at = Utc::now();
    }

    /// Apply the fields present in `patch` (PATCH semantics)
    pub fn apply(&mut self, patch: JobPostPatch) {
        if patch.is_empty() {
            return;
        }

        if let Some(title) = patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(company) = patch.company {
            self.company = company.trim().to_string();
        }
        if let Some(location) = patch.location {
            self.location = location.trim().to_string();
        }
        if let Some(salary) = patch.salary {
            self.salary = normalize_optional(salary);
        }
        self.updated_at = Utc::now();
    }
}

/// Client-writable fields of a job application
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct JobApplicationFields {
    #[validate(length(min = 1, max = 5000), custom(function = "not_blank"))]
    pub cover_letter: String,

    #[validate(url)]
    #[serde(default)]
    pub resume_url: Option<String>,
}

/// Job application entity; immutable once created
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobApplication {
    pub id: Uuid,
    pub job_id: Uuid,
    pub applicant: Uuid,
    pub cover_letter: String,
    pub resume_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl JobApplication {
    /// Create an application by `applicant` against job post `job_id`
    pub fn new(job_id: Uuid, applicant: Uuid, fields: JobApplicationFields) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_id,
            applicant,
            cover_letter: fields.cover_letter,
            resume_url: normalize_optional(fields.resume_url),
            created_at: Utc::now(),
        }
    }
}
