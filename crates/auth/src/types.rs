//! Identity types handed to handlers

use serde::Serialize;
use uuid::Uuid;

/// Identity of the authenticated caller, as asserted by the access token.
///
/// Users live in the external identity provider; the job board only ever
/// references them by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthIdentity {
    pub id: Uuid,
    pub email: Option<String>,
}
