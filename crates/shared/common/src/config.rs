//! Shared configuration structures.

use serde::{Deserialize, Serialize};

use domain::{ANONYMOUS_PRINCIPAL, INTERNAL_PRINCIPALS};

/// Base service configuration shared by all services.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Identity settings resolved once at startup.
///
/// These settings are effectively immutable for the lifetime of the process;
/// request handling only ever reads the policy derived from them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdentitySettings {
    /// Principal name claimed by unauthenticated access
    pub anonymous_principal: String,
    /// Roles granted to the anonymous principal; an empty list disables
    /// anonymous access
    pub anonymous_roles: Vec<String>,
    /// Principals that are internal for the lifetime of the process
    pub internal_principals: Vec<String>,
}

impl Default for IdentitySettings {
    fn default() -> Self {
        Self {
            anonymous_principal: ANONYMOUS_PRINCIPAL.to_string(),
            anonymous_roles: Vec::new(),
            internal_principals: INTERNAL_PRINCIPALS.iter().map(|p| (*p).to_string()).collect(),
        }
    }
}
