//! Password-change service - decides eligibility and delegates persistence.
//!
//! SOLID (SRP): Handles password-change requests only. Who may request a
//! change, transport parsing, and hashing all belong to the surrounding
//! layers.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use common::AppError;
use domain::{ChangePasswordRequest, IdentityClass, IdentityPolicy};

use crate::repository::AccountStore;
use crate::service::{ChangeOutcome, OutcomeSink};

/// Password-change service trait for dependency injection.
#[async_trait]
pub trait PasswordService: Send + Sync {
    /// Process a change-password request.
    ///
    /// Exactly one outcome is delivered to the sink per call: a local
    /// rejection for anonymous or internal targets (without touching the
    /// account store), or the store's own completion for mutable targets.
    async fn change_password(&self, request: ChangePasswordRequest, sink: OutcomeSink);
}

/// Concrete implementation of PasswordService using an account store.
pub struct PasswordManager {
    store: Arc<dyn AccountStore>,
    policy: IdentityPolicy,
}

impl PasswordManager {
    /// Create new password service instance with store and identity policy
    pub fn new(store: Arc<dyn AccountStore>, policy: IdentityPolicy) -> Self {
        Self { store, policy }
    }

    async fn evaluate(&self, request: &ChangePasswordRequest) -> ChangeOutcome {
        match self.policy.classify(request.username()) {
            IdentityClass::Anonymous => {
                debug!(
                    username = request.username(),
                    "rejected password change for anonymous principal"
                );
                Err(AppError::validation(format!(
                    "user [{}] is anonymous and cannot be modified",
                    request.username()
                )))
            }
            IdentityClass::Internal => {
                debug!(
                    username = request.username(),
                    "rejected password change for internal principal"
                );
                Err(AppError::validation(format!(
                    "user [{}] is internal",
                    request.username()
                )))
            }
            // The store's failure cause is forwarded as-is; retry policy
            // belongs to the store or the dispatcher.
            IdentityClass::Mutable => self.store.change_password(request).await,
        }
    }
}

#[async_trait]
impl PasswordService for PasswordManager {
    async fn change_password(&self, request: ChangePasswordRequest, sink: OutcomeSink) {
        sink.deliver(self.evaluate(&request).await);
    }
}
