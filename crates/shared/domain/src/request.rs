//! Change-password request value.

use std::fmt;

use crate::error::{DomainError, DomainResult};

/// Request to change the password of a target account.
///
/// The password hash is opaque to this subsystem; it is produced by an
/// external hashing policy before the request is constructed. Both fields are
/// immutable once the request exists, and handlers pass the value through to
/// collaborators unchanged.
#[derive(Clone, PartialEq, Eq)]
pub struct ChangePasswordRequest {
    username: String,
    password_hash: String,
}

impl ChangePasswordRequest {
    /// Create a validated request.
    ///
    /// # Errors
    /// Returns a validation error if the username or the password hash is
    /// empty.
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> DomainResult<Self> {
        let username = username.into();
        let password_hash = password_hash.into();

        if username.is_empty() {
            return Err(DomainError::validation("username is missing"));
        }
        if password_hash.is_empty() {
            return Err(DomainError::validation("password hash is missing"));
        }

        Ok(Self {
            username,
            password_hash,
        })
    }

    /// Name of the target account
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Pre-hashed credential to persist
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

// Don't expose the hash in debug output (security)
impl fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordRequest")
            .field("username", &self.username)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}
