//! Domain-level constants.
//!
//! These constants define the fixed identities of the running process and
//! the default role vocabulary.

// =============================================================================
// Internal Principals
// =============================================================================

/// Principal of the process-level system actor (never a persisted account)
pub const SYSTEM_PRINCIPAL: &str = "system";

/// Principal of the internal service actor (never a persisted account)
pub const SERVICE_PRINCIPAL: &str = "service";

/// Principals that are internal for the lifetime of the process
pub const INTERNAL_PRINCIPALS: &[&str] = &[SYSTEM_PRINCIPAL, SERVICE_PRINCIPAL];

/// Check if a principal name is internal by default
pub fn is_internal_principal(name: &str) -> bool {
    INTERNAL_PRINCIPALS.contains(&name)
}

// =============================================================================
// Anonymous Access
// =============================================================================

/// Default principal assigned to unauthenticated access when enabled
pub const ANONYMOUS_PRINCIPAL: &str = "anonymous";

// =============================================================================
// Built-in Accounts
// =============================================================================

/// Built-in administrator account (password-bearing, so its password may be
/// changed like any ordinary account)
pub const ADMIN_PRINCIPAL: &str = "admin";

// =============================================================================
// Roles
// =============================================================================

/// Role granting unrestricted access
pub const ROLE_SUPERUSER: &str = "superuser";

/// Default role assigned to ordinary accounts
pub const ROLE_USER: &str = "user";
