//! On-disk vault layout.
//!
//! A vault directory holds exactly two files:
//!
//! ```text
//! vault.key   64 lowercase hex characters (the 32-byte master key)
//! vault.json  { "secrets": { "<name>": { "value": "<nonce>:<tag>:<ct>",
//!                                        "desc": "...",
//!                                        "createdAt": "<RFC 3339>" } } }
//! ```
//!
//! The directory is created with mode 0700 and both files with 0600.
//! Every write replaces the whole file via an owner-only temp file and
//! a rename.  There is
//! no locking: concurrent writers race with last-writer-wins semantics.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::secret::SecretEntry;
use crate::config::VaultConfig;
use crate::crypto::MasterKey;
use crate::errors::{AgentVaultError, Result};

/// Everything stored in `vault.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VaultData {
    /// Secret name -> encrypted entry.  Sorted for stable file diffs.
    #[serde(default)]
    pub secrets: BTreeMap<String, SecretEntry>,
}

// ---------------------------------------------------------------------------
// vault.json
// ---------------------------------------------------------------------------

/// Read and parse `vault.json`.
pub fn read_data(config: &VaultConfig) -> Result<VaultData> {
    let path = config.data_path();
    if !path.exists() {
        return Err(AgentVaultError::VaultNotFound(config.dir().to_path_buf()));
    }

    let bytes = fs::read(&path)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| AgentVaultError::MalformedVaultData(format!("{}: {e}", path.display())))
}

/// Serialize `data` and replace `vault.json` atomically.
pub fn write_data(config: &VaultConfig, data: &VaultData) -> Result<()> {
    let mut json = serde_json::to_vec_pretty(data)
        .map_err(|e| AgentVaultError::SerializationError(format!("vault data: {e}")))?;
    json.push(b'\n');

    write_private(&config.data_path(), &json)
}

// ---------------------------------------------------------------------------
// vault.key
// ---------------------------------------------------------------------------

/// Load the master key.
///
/// A missing key file is reported as `KeyMaterialMissing`: without it
/// nothing in `vault.json` can ever be decrypted.
pub fn read_key(config: &VaultConfig) -> Result<MasterKey> {
    let path = config.key_path();
    if !path.exists() {
        return Err(AgentVaultError::KeyMaterialMissing(path));
    }

    let encoded = zeroize::Zeroizing::new(fs::read_to_string(&path)?);
    MasterKey::from_hex(&encoded)
}

/// Write the master key as hex with owner-only permissions.
pub fn write_key(config: &VaultConfig, key: &MasterKey) -> Result<()> {
    let mut encoded = key.to_hex();
    encoded.push('\n');
    write_private(&config.key_path(), encoded.as_bytes())
}

// ---------------------------------------------------------------------------
// Filesystem helpers
// ---------------------------------------------------------------------------

/// Create the vault directory (if needed) and restrict it to the owner.
pub fn ensure_private_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o700))?;
    }

    Ok(())
}

/// Replace a (non-vault) file atomically, keeping its permissions.
///
/// A file that does not exist yet is created owner-only, since it may
/// now hold restored secret values.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let existing = fs::metadata(path).ok().map(|m| m.permissions());
    replace_via_tmp(path, bytes, existing)
}

/// Write `bytes` to `path` atomically with mode 0600.
fn write_private(path: &Path, bytes: &[u8]) -> Result<()> {
    replace_via_tmp(path, bytes, None)
}

/// Write to an owner-only temp file next to `path`, apply `perms`, then
/// rename over `path`.  The temp file is removed if any step fails.
fn replace_via_tmp(path: &Path, bytes: &[u8], perms: Option<fs::Permissions>) -> Result<()> {
    let tmp_path = tmp_path_for(path);

    let result = (|| -> Result<()> {
        let mut file = create_private_file(&tmp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        drop(file);

        if let Some(perms) = perms {
            fs::set_permissions(&tmp_path, perms)?;
        }
        fs::rename(&tmp_path, path)?;
        Ok(())
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

/// Create a new file that only the owner can read, failing if it exists.
fn create_private_file(path: &Path) -> Result<fs::File> {
    #[cfg(unix)]
    let file = {
        use std::os::unix::fs::OpenOptionsExt;
        fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .mode(0o600)
            .open(path)?
    };

    #[cfg(not(unix))]
    let file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)?;

    Ok(file)
}

/// Unique temp file in the same directory, so the rename stays on one
/// filesystem.
fn tmp_path_for(path: &Path) -> PathBuf {
    let parent = path.parent().unwrap_or(Path::new("."));
    parent.join(format!(
        ".{}.{}.{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy(),
        std::process::id(),
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or(0)
    ))
}
