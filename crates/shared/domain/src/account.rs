//! Account entity persisted by account stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::ROLE_USER;

/// A persisted account identity.
///
/// Internal and anonymous principals are never represented as accounts; they
/// exist only as configuration (see [`crate::identity`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub roles: Vec<String>,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new enabled account with the default role
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self::with_roles(username, password_hash, vec![ROLE_USER.to_string()])
    }

    /// Create a new enabled account with explicit roles
    pub fn with_roles(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        roles: Vec<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            roles,
            enabled: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Disable the account
    pub fn disable(&mut self) {
        self.enabled = false;
        self.updated_at = Utc::now();
    }

    /// Re-enable the account
    pub fn enable(&mut self) {
        self.enabled = true;
        self.updated_at = Utc::now();
    }

    /// Check if the account carries a role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}
