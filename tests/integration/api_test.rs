//! API endpoint integration tests
//!
//! Drives the composed router end to end: job posts, applications, and authentication.

#![allow(dead_code)]

mod applications;
mod auth;
mod common;
mod jobs;
mod postgres;
