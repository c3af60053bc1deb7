//! Identity classification for credential mutation eligibility.
//!
//! Every username resolves, at check time, to exactly one [`IdentityClass`].
//! Classification consults only the [`IdentityPolicy`] value, which is
//! resolved once at startup and never mutated during request handling, so
//! equivalent requests always take the same branch.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::INTERNAL_PRINCIPALS;

static DEFAULT_INTERNAL: Lazy<HashSet<String>> =
    Lazy::new(|| INTERNAL_PRINCIPALS.iter().map(|p| (*p).to_string()).collect());

/// Classification of a target username.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityClass {
    /// Configured fallback identity representing unauthenticated access
    Anonymous,
    /// Fixed system actor that exists for the lifetime of the process
    Internal,
    /// Resolvable account identity eligible for password changes
    Mutable,
}

/// The anonymous principal derived from settings.
///
/// Exists only while anonymous access is enabled for the running instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnonymousPrincipal {
    name: String,
    roles: Vec<String>,
}

impl AnonymousPrincipal {
    /// Resolve the anonymous principal from settings.
    ///
    /// Anonymous access is enabled only while the configured role list is
    /// non-empty; an empty list resolves to `None`.
    pub fn resolve(name: impl Into<String>, roles: Vec<String>) -> Option<Self> {
        if roles.is_empty() {
            return None;
        }
        Some(Self {
            name: name.into(),
            roles,
        })
    }

    /// Principal name claimed by unauthenticated access
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Roles granted to unauthenticated access
    pub fn roles(&self) -> &[String] {
        &self.roles
    }
}

/// Process-wide identity policy, immutable after construction.
#[derive(Debug, Clone)]
pub struct IdentityPolicy {
    anonymous: Option<AnonymousPrincipal>,
    internal: HashSet<String>,
}

impl IdentityPolicy {
    /// Create a policy from a resolved anonymous principal and the set of
    /// internal principal names.
    pub fn new(
        anonymous: Option<AnonymousPrincipal>,
        internal: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            anonymous,
            internal: internal.into_iter().collect(),
        }
    }

    /// Classify a username.
    ///
    /// The anonymous check runs before the internal check; a name claimed by
    /// both classes is anonymous.
    pub fn classify(&self, username: &str) -> IdentityClass {
        if let Some(anonymous) = &self.anonymous {
            if anonymous.name() == username {
                return IdentityClass::Anonymous;
            }
        }
        if self.internal.contains(username) {
            return IdentityClass::Internal;
        }
        IdentityClass::Mutable
    }

    /// Whether anonymous access is enabled for the running instance
    pub fn anonymous_enabled(&self) -> bool {
        self.anonymous.is_some()
    }

    /// The resolved anonymous principal, if enabled
    pub fn anonymous(&self) -> Option<&AnonymousPrincipal> {
        self.anonymous.as_ref()
    }
}

impl Default for IdentityPolicy {
    fn default() -> Self {
        Self {
            anonymous: None,
            internal: DEFAULT_INTERNAL.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{SERVICE_PRINCIPAL, SYSTEM_PRINCIPAL};

    #[test]
    fn test_default_policy_classifies_internal_principals() {
        let policy = IdentityPolicy::default();

        assert_eq!(policy.classify(SYSTEM_PRINCIPAL), IdentityClass::Internal);
        assert_eq!(policy.classify(SERVICE_PRINCIPAL), IdentityClass::Internal);
    }

    #[test]
    fn test_default_policy_leaves_accounts_mutable() {
        let policy = IdentityPolicy::default();

        assert_eq!(policy.classify("joe"), IdentityClass::Mutable);
        assert_eq!(policy.classify("admin"), IdentityClass::Mutable);
    }

    #[test]
    fn test_anonymous_disabled_by_default() {
        let policy = IdentityPolicy::default();

        assert!(!policy.anonymous_enabled());
        assert_eq!(policy.classify("anonymous"), IdentityClass::Mutable);
    }

    #[test]
    fn test_anonymous_enabled_with_roles() {
        let anonymous = AnonymousPrincipal::resolve("anonymous", vec!["superuser".to_string()]);
        let policy = IdentityPolicy::new(anonymous, IdentityPolicy::default().internal);

        assert!(policy.anonymous_enabled());
        assert_eq!(policy.classify("anonymous"), IdentityClass::Anonymous);
    }

    #[test]
    fn test_empty_roles_resolve_to_disabled() {
        assert!(AnonymousPrincipal::resolve("anonymous", Vec::new()).is_none());
    }

    #[test]
    fn test_anonymous_takes_precedence_over_internal() {
        let anonymous = AnonymousPrincipal::resolve(SYSTEM_PRINCIPAL, vec!["user".to_string()]);
        let policy = IdentityPolicy::new(anonymous, IdentityPolicy::default().internal);

        assert_eq!(policy.classify(SYSTEM_PRINCIPAL), IdentityClass::Anonymous);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let policy = IdentityPolicy::default();

        assert_eq!(policy.classify("joe"), policy.classify("joe"));
        assert_eq!(
            policy.classify(SYSTEM_PRINCIPAL),
            policy.classify(SYSTEM_PRINCIPAL)
        );
    }
}
