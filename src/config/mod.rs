//! Configuration — where the vault lives and how callers treat detections.
//!
//! - `VaultConfig` resolves the vault directory and is passed explicitly
//!   into every `VaultStore` operation (`location`)
//! - `Settings` holds optional per-vault policy loaded from `config.toml`
//!   (`settings`)

pub mod location;
pub mod settings;

pub use location::{VaultConfig, VAULT_DIR_ENV};
pub use settings::Settings;
