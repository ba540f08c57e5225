use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in agent-vault.
///
/// "Not found" outcomes during restoration (a missing secret, an
/// unresolved fingerprint) are not errors: they are reported as data
/// on `Restoration` / `UnvaultedRestoration`.
#[derive(Debug, Error)]
pub enum AgentVaultError {
    // --- Vault errors ---
    #[error("No vault found at {0} (run `agent-vault init` first)")]
    VaultNotFound(PathBuf),

    #[error("Invalid secret name '{0}': use lowercase letters, digits, and inner hyphens")]
    InvalidName(String),

    #[error("Vault key file missing at {0}: vault data exists but cannot be decrypted")]
    KeyMaterialMissing(PathBuf),

    #[error("Malformed vault data: {0}")]
    MalformedVaultData(String),

    #[error("Decryption failed: vault data has been tampered with or corrupted")]
    TamperedData,

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,

    #[error("Refusing to write {count} unresolved reference(s): {}", .names.join(", "))]
    UnresolvedReferences { count: usize, names: Vec<String> },
}

/// Convenience type alias for agent-vault results.
pub type Result<T> = std::result::Result<T, AgentVaultError>;
