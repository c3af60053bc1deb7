//! Account store port - owns persisted credential mutation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use common::{AppResult, OptionExt};
use domain::{Account, ChangePasswordRequest, ADMIN_PRINCIPAL, ROLE_SUPERUSER};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Account store trait for dependency injection.
///
/// The store owns the actual credential mutation and treats each change as
/// atomic; callers receive either the store's success or its failure cause.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist the new password hash for the account named by the request.
    async fn change_password(&self, request: &ChangePasswordRequest) -> AppResult<()>;
}

/// In-memory implementation of AccountStore.
///
/// Accounts are keyed by username. Suitable for tests and embedded setups;
/// deployments with durable storage supply their own implementation behind
/// the trait.
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

impl MemoryAccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the built-in administrator account
    pub fn with_builtins(admin_password_hash: impl Into<String>) -> Self {
        let admin = Account::with_roles(
            ADMIN_PRINCIPAL,
            admin_password_hash,
            vec![ROLE_SUPERUSER.to_string()],
        );

        let mut accounts = HashMap::new();
        accounts.insert(admin.username.clone(), admin);

        Self {
            accounts: RwLock::new(accounts),
        }
    }

    /// Insert or replace an account
    pub async fn put_account(&self, account: Account) {
        self.accounts
            .write()
            .await
            .insert(account.username.clone(), account);
    }

    /// Fetch a copy of an account by username
    pub async fn get_account(&self, username: &str) -> Option<Account> {
        self.accounts.read().await.get(username).cloned()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn change_password(&self, request: &ChangePasswordRequest) -> AppResult<()> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(request.username()).ok_or_not_found()?;

        account.set_password_hash(request.password_hash().to_string());
        debug!(username = request.username(), "password hash updated");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;

    #[tokio::test]
    async fn test_change_password_updates_existing_account() {
        let store = MemoryAccountStore::new();
        store.put_account(Account::new("joe", "$2a$10$old")).await;

        let request = ChangePasswordRequest::new("joe", "$2a$10$new").unwrap();
        store.change_password(&request).await.unwrap();

        let account = store.get_account("joe").await.unwrap();
        assert_eq!(account.password_hash, "$2a$10$new");
    }

    #[tokio::test]
    async fn test_change_password_for_missing_account() {
        let store = MemoryAccountStore::new();

        let request = ChangePasswordRequest::new("ghost", "$2a$10$new").unwrap();
        let result = store.change_password(&request).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_with_builtins_seeds_admin() {
        let store = MemoryAccountStore::with_builtins("$2a$10$admin");

        let admin = store.get_account(ADMIN_PRINCIPAL).await.unwrap();
        assert!(admin.has_role(ROLE_SUPERUSER));
        assert!(admin.enabled);
    }
}
