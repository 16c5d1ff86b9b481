//! Shared utilities, configuration, and error handling for the job board
//!
//! This crate provides common functionality used across the workspace:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - Request extractors with input validation

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;

pub use config::Config;
pub use db::RepositoryError;
pub use error::{Error, FieldErrors, Result};
pub use extractors::{JsonBody, ValidatedJson};
