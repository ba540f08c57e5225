//! Vault module — encrypted secret storage.
//!
//! This module provides:
//! - `SecretEntry` and `SecretMetadata` types (`secret`)
//! - On-disk layout: `vault.key` and `vault.json` (`format`)
//! - High-level `VaultStore` for initializing and managing a vault (`store`)

pub mod format;
pub mod secret;
pub mod store;

// Re-export the most commonly used items.
pub use format::VaultData;
pub use secret::{is_valid_name, SecretEntry, SecretMetadata};
pub use store::{InitOutcome, VaultStore};
