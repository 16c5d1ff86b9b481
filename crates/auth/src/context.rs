//! Authorization context for authenticated users

use uuid::Uuid;

use crate::types::AuthIdentity;

/// Represents an authenticated user context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user: AuthIdentity,
}

impl AuthContext {
    /// Create new auth context for a user
    pub fn new(user: AuthIdentity) -> Self {
        Self { user }
    }

    /// ID of the authenticated user
    pub fn user_id(&self) -> Uuid {
        self.user.id
    }

    /// Check whether this user is the given user (e.g. a resource owner)
    pub fn is_user(&self, user_id: Uuid) -> bool {
        self.user.id == user_id
    }
}
