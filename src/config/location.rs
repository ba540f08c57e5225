//! Vault directory resolution.
//!
//! The vault is a directory holding exactly two files, `vault.key` and
//! `vault.json`.  Its location defaults to `~/.agent-vault` and can be
//! overridden with the `AGENT_VAULT_DIR` environment variable.

use std::path::{Path, PathBuf};

use crate::errors::{AgentVaultError, Result};

/// Environment variable that overrides the default vault directory.
pub const VAULT_DIR_ENV: &str = "AGENT_VAULT_DIR";

/// Directory name used under the user's home when no override is set.
const DEFAULT_DIR_NAME: &str = ".agent-vault";

const KEY_FILE: &str = "vault.key";
const DATA_FILE: &str = "vault.json";
const SETTINGS_FILE: &str = "config.toml";

/// Resolved location of a vault on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultConfig {
    dir: PathBuf,
}

impl VaultConfig {
    /// Use an explicit vault directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve the vault directory from `AGENT_VAULT_DIR`, falling back
    /// to `~/.agent-vault`.
    pub fn from_env() -> Result<Self> {
        if let Some(dir) = std::env::var_os(VAULT_DIR_ENV) {
            if !dir.is_empty() {
                return Ok(Self::new(dir));
            }
        }

        let home = dirs::home_dir().ok_or_else(|| {
            AgentVaultError::ConfigError(format!(
                "cannot determine home directory; set {VAULT_DIR_ENV}"
            ))
        })?;
        Ok(Self::new(home.join(DEFAULT_DIR_NAME)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path to the hex-encoded master key.
    pub fn key_path(&self) -> PathBuf {
        self.dir.join(KEY_FILE)
    }

    /// Path to the JSON secrets file.
    pub fn data_path(&self) -> PathBuf {
        self.dir.join(DATA_FILE)
    }

    /// Path to the optional policy file.
    pub fn settings_path(&self) -> PathBuf {
        self.dir.join(SETTINGS_FILE)
    }
}
