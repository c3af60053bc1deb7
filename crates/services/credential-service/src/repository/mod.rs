//! Account store port and implementations.

mod account_store;

pub use account_store::{AccountStore, MemoryAccountStore};

#[cfg(any(test, feature = "test-utils"))]
pub use account_store::MockAccountStore;
