//! Explicit session context for authenticated remote calls.
//!
//! The bearer credential and user identity are constructed once on
//! login and dropped on logout, instead of being read from ambient
//! storage by every caller.

use serde::{Deserialize, Serialize};

/// The authenticated user, as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Bearer credential plus the user it belongs to.
#[derive(Debug, Clone)]
pub struct Session {
    token: String,
    user: UserProfile,
}

impl Session {
    /// Open a session from a login response.
    pub fn new(token: impl Into<String>, user: UserProfile) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }

    /// The bearer token attached to every remote call.
    pub fn bearer_token(&self) -> &str {
        &self.token
    }

    pub fn user(&self) -> &UserProfile {
        &self.user
    }
}
