//! High-level vault operations.
//!
//! `VaultStore` wraps the file format layer and the crypto layer so that
//! callers can work with simple method calls like
//! `store.set("openai-key", "sk-...", None)`.
//!
//! The store keeps no state beyond its `VaultConfig`.  Every operation
//! re-reads `vault.json` (and `vault.key` when it needs to decrypt), and
//! every mutation rewrites the whole file.  The master key and any
//! decrypted values live only for the duration of a single call.

use std::collections::HashMap;

use chrono::Utc;
use tracing::debug;
use zeroize::Zeroize;

use crate::config::VaultConfig;
use crate::crypto::{decrypt, encrypt, MasterKey};
use crate::errors::{AgentVaultError, Result};

use super::format::{self, VaultData};
use super::secret::{is_valid_name, SecretEntry, SecretMetadata};

/// Result of `VaultStore::init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// A new master key and empty vault were written.
    Created,
    /// The vault already existed and was left untouched.
    AlreadyInitialized,
}

/// Handle to a vault directory.
#[derive(Debug, Clone)]
pub struct VaultStore {
    config: VaultConfig,
}

impl VaultStore {
    pub fn new(config: VaultConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &VaultConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Initialization
    // ------------------------------------------------------------------

    /// Create the master key and an empty vault if they are absent.
    ///
    /// Idempotent: an existing key is never regenerated and existing data
    /// is never erased.  Data without a key is refused, since a new key
    /// could not decrypt it.
    pub fn init(&self) -> Result<InitOutcome> {
        format::ensure_private_dir(self.config.dir())?;

        let key_path = self.config.key_path();
        let data_path = self.config.data_path();

        let mut outcome = InitOutcome::AlreadyInitialized;

        if !key_path.exists() {
            if data_path.exists() {
                return Err(AgentVaultError::KeyMaterialMissing(key_path));
            }
            format::write_key(&self.config, &MasterKey::generate())?;
            outcome = InitOutcome::Created;
        }

        if !data_path.exists() {
            format::write_data(&self.config, &VaultData::default())?;
            outcome = InitOutcome::Created;
        }

        debug!(dir = %self.config.dir().display(), ?outcome, "vault init");
        Ok(outcome)
    }

    // ------------------------------------------------------------------
    // Secret operations
    // ------------------------------------------------------------------

    /// Add or overwrite a secret.
    ///
    /// The value is encrypted under the master key with a fresh nonce and
    /// the entry gets a new `createdAt`.
    pub fn set(&self, name: &str, value: &str, description: Option<&str>) -> Result<()> {
        validate_name(name)?;

        let (key, mut data) = self.load_with_key()?;

        let entry = SecretEntry {
            value: encrypt(&key, value.as_bytes())?,
            desc: description.map(str::to_string),
            created_at: Utc::now(),
        };
        let replaced = data.secrets.insert(name.to_string(), entry).is_some();

        format::write_data(&self.config, &data)?;
        debug!(name, replaced, "secret stored");
        Ok(())
    }

    /// Decrypt and return a secret's value, or `None` if it does not exist.
    ///
    /// A name that fails validation cannot exist, so it is also `None`.
    pub fn get(&self, name: &str) -> Result<Option<String>> {
        let (key, data) = self.load_with_key()?;
        data.secrets
            .get(name)
            .map(|entry| decrypt_entry(&key, entry))
            .transpose()
    }

    /// Metadata for a secret, or `None` if it does not exist.
    ///
    /// No decryption is performed.
    pub fn get_metadata(&self, name: &str) -> Result<Option<SecretMetadata>> {
        let data = self.load()?;
        Ok(data
            .secrets
            .get(name)
            .map(|entry| SecretMetadata::from_entry(name, entry)))
    }

    /// Returns `true` if the vault contains a secret with the given name.
    ///
    /// This is a metadata-only check; no decryption is performed.
    pub fn has(&self, name: &str) -> Result<bool> {
        Ok(self.load()?.secrets.contains_key(name))
    }

    /// List metadata for all secrets, sorted by name.
    pub fn list(&self) -> Result<Vec<SecretMetadata>> {
        let data = self.load()?;
        Ok(data
            .secrets
            .iter()
            .map(|(name, entry)| SecretMetadata::from_entry(name, entry))
            .collect())
    }

    /// Delete a secret.  Returns whether it existed.
    pub fn remove(&self, name: &str) -> Result<bool> {
        let mut data = self.load()?;

        let existed = data.secrets.remove(name).is_some();
        if existed {
            format::write_data(&self.config, &data)?;
        }

        debug!(name, existed, "secret removed");
        Ok(existed)
    }

    /// Decrypt every secret and return a plaintext value -> name map.
    ///
    /// This is the input to `redact::redact`.  If two names hold the same
    /// value, the name that sorts last wins.
    pub fn all_values(&self) -> Result<HashMap<String, String>> {
        let (key, data) = self.load_with_key()?;

        let mut map = HashMap::with_capacity(data.secrets.len());
        for (name, entry) in &data.secrets {
            let value = decrypt_entry(&key, entry)?;
            map.insert(value, name.clone());
        }

        debug!(count = map.len(), "decrypted all values");
        Ok(map)
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Read `vault.json`, requiring the key file to be present as well.
    fn load(&self) -> Result<VaultData> {
        let data = format::read_data(&self.config)?;

        let key_path = self.config.key_path();
        if !key_path.exists() {
            return Err(AgentVaultError::KeyMaterialMissing(key_path));
        }

        Ok(data)
    }

    fn load_with_key(&self) -> Result<(MasterKey, VaultData)> {
        let data = format::read_data(&self.config)?;
        let key = format::read_key(&self.config)?;
        Ok((key, data))
    }
}

/// Reject names outside `^[a-z0-9]([a-z0-9-]*[a-z0-9])?$` before any
/// encryption or storage happens.
fn validate_name(name: &str) -> Result<()> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(AgentVaultError::InvalidName(name.to_string()))
    }
}

fn decrypt_entry(key: &MasterKey, entry: &SecretEntry) -> Result<String> {
    let plaintext_bytes = decrypt(key, &entry.value)?;

    // Convert to String via from_utf8 which takes ownership (no clone).
    // On error, zeroize the bytes inside the error before discarding.
    String::from_utf8(plaintext_bytes).map_err(|e| {
        let mut bad_bytes = e.into_bytes();
        bad_bytes.zeroize();
        AgentVaultError::MalformedVaultData("secret value is not valid UTF-8".to_string())
    })
}
