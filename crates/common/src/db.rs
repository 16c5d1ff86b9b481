//! Shared database types for the job board
//!
//! This module provides common database-related types used across domain repositories.

use crate::error::Error;
use thiserror::Error;

/// Database-specific error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record already exists")]
    AlreadyExists,

    /// A foreign key pointed at a row that does not exist (or no longer does)
    #[error("Referenced {0} does not exist")]
    MissingReference(&'static str),

    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyExists => Error::Conflict("Record already exists".to_string()),
            RepositoryError::MissingReference(what) => {
                Error::NotFound(format!("{} not found", capitalize(what)))
            }
            RepositoryError::Connection(e) => Error::Database(e),
            RepositoryError::Unavailable(msg) => Error::Internal(msg),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
