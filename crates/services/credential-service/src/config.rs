//! Credential service configuration.

use std::env;

use common::{IdentitySettings, ServiceConfig};
use domain::{AnonymousPrincipal, IdentityPolicy};

/// Credential service configuration.
#[derive(Debug, Clone)]
pub struct CredentialServiceConfig {
    /// Base service settings
    pub service: ServiceConfig,
    /// Identity settings resolved at startup
    pub identity: IdentitySettings,
}

impl CredentialServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = IdentitySettings::default();

        Self {
            service: ServiceConfig {
                service_name: "credential-service".to_string(),
                log_level: env::var("CREDENTIAL_SERVICE_LOG_LEVEL")
                    .or_else(|_| env::var("LOG_LEVEL"))
                    .unwrap_or_else(|_| "info".to_string()),
            },
            identity: IdentitySettings {
                anonymous_principal: env::var("CREDENTIAL_SERVICE_ANONYMOUS_PRINCIPAL")
                    .unwrap_or(defaults.anonymous_principal),
                anonymous_roles: env::var("CREDENTIAL_SERVICE_ANONYMOUS_ROLES")
                    .map(|v| split_csv(&v))
                    .unwrap_or(defaults.anonymous_roles),
                internal_principals: env::var("CREDENTIAL_SERVICE_INTERNAL_PRINCIPALS")
                    .map(|v| split_csv(&v))
                    .unwrap_or(defaults.internal_principals),
            },
        }
    }

    /// Resolve the identity policy consulted on every request.
    ///
    /// Anonymous access is enabled only while the configured role list is
    /// non-empty.
    pub fn identity_policy(&self) -> IdentityPolicy {
        let anonymous = AnonymousPrincipal::resolve(
            self.identity.anonymous_principal.clone(),
            self.identity.anonymous_roles.clone(),
        );

        IdentityPolicy::new(anonymous, self.identity.internal_principals.iter().cloned())
    }
}

impl Default for CredentialServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "credential-service".to_string(),
                log_level: "info".to_string(),
            },
            identity: IdentitySettings::default(),
        }
    }
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
