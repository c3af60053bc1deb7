//! Credential Service Library
//!
//! This crate decides whether a password change is permitted for a target
//! identity and delegates the persisted change to an account store. It is
//! transport-agnostic: a surrounding dispatcher constructs validated
//! requests, supplies the completion sink, and awaits the outcome.

pub mod config;
pub mod repository;
pub mod service;

pub use config::CredentialServiceConfig;
pub use repository::{AccountStore, MemoryAccountStore};
pub use service::{ChangeOutcome, OutcomeSink, PasswordManager, PasswordService};
