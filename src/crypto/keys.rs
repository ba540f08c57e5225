//! The vault master key.
//!
//! A single random 256-bit key encrypts every value in the vault.  It is
//! generated once when the vault is initialized and persisted as 64
//! lowercase hex characters in `vault.key`.

use rand::RngCore;
use zeroize::{Zeroize, Zeroizing};

use crate::errors::{AgentVaultError, Result};

/// Length of the master key (256 bits).
pub const KEY_LEN: usize = 32;

/// A wrapper around a 32-byte master key that automatically zeroes
/// its memory when dropped.
///
/// Use this to hold the master key in memory so it cannot linger
/// after it is no longer needed.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct MasterKey {
    bytes: [u8; KEY_LEN],
}

impl MasterKey {
    /// Create a new `MasterKey` from raw bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Generate a fresh key from the thread-local CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        rand::rng().fill_bytes(&mut bytes);
        let key = Self::new(bytes);
        bytes.zeroize();
        key
    }

    /// Parse the hex encoding stored in `vault.key`.
    ///
    /// Surrounding whitespace (e.g. a trailing newline) is ignored.
    pub fn from_hex(encoded: &str) -> Result<Self> {
        let mut bytes = [0u8; KEY_LEN];
        hex::decode_to_slice(encoded.trim(), &mut bytes).map_err(|e| {
            AgentVaultError::MalformedVaultData(format!("vault key is not 64 hex characters: {e}"))
        })?;
        let key = Self::new(bytes);
        bytes.zeroize();
        Ok(key)
    }

    /// Lowercase hex encoding, wiped from memory on drop.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.bytes))
    }

    /// Access the raw key bytes (e.g. to build a cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}
