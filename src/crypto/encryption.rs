//! AES-256-GCM authenticated encryption.
//!
//! Each call to `encrypt` generates a fresh random 12-byte nonce.  The
//! result keeps the nonce, the 16-byte authentication tag, and the
//! ciphertext as three independent segments, which is how they are
//! persisted:
//!
//! ```text
//! <nonce_hex (24)>:<tag_hex (32)>:<ciphertext_hex>
//! ```

use aes_gcm::aead::{AeadInPlace, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce, Tag};

use super::keys::MasterKey;
use crate::errors::{AgentVaultError, Result};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the AES-256-GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// An encrypted value split into its three segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedValue {
    pub nonce: [u8; NONCE_LEN],
    pub tag: [u8; TAG_LEN],
    pub ciphertext: Vec<u8>,
}

impl EncryptedValue {
    /// Encode as `nonce_hex:tag_hex:ciphertext_hex` (lowercase hex).
    pub fn to_wire(&self) -> String {
        format!(
            "{}:{}:{}",
            hex::encode(self.nonce),
            hex::encode(self.tag),
            hex::encode(&self.ciphertext)
        )
    }

    /// Parse the `nonce_hex:tag_hex:ciphertext_hex` encoding.
    pub fn from_wire(s: &str) -> Result<Self> {
        let mut parts = s.split(':');
        let (Some(nonce_hex), Some(tag_hex), Some(ct_hex), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(AgentVaultError::MalformedVaultData(
                "encrypted value must have exactly three ':'-separated segments".into(),
            ));
        };

        let mut nonce = [0u8; NONCE_LEN];
        hex::decode_to_slice(nonce_hex, &mut nonce).map_err(|e| {
            AgentVaultError::MalformedVaultData(format!("nonce segment: {e}"))
        })?;

        let mut tag = [0u8; TAG_LEN];
        hex::decode_to_slice(tag_hex, &mut tag)
            .map_err(|e| AgentVaultError::MalformedVaultData(format!("tag segment: {e}")))?;

        let ciphertext = hex::decode(ct_hex).map_err(|e| {
            AgentVaultError::MalformedVaultData(format!("ciphertext segment: {e}"))
        })?;

        Ok(Self {
            nonce,
            tag,
            ciphertext,
        })
    }

    /// Length of the plaintext this value decrypts to.
    ///
    /// GCM is a stream mode, so this is known without decrypting.
    pub fn plaintext_len(&self) -> usize {
        self.ciphertext.len()
    }
}

/// Encrypt `plaintext` under the master key with a fresh random nonce.
pub fn encrypt(key: &MasterKey, plaintext: &[u8]) -> Result<EncryptedValue> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| AgentVaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    // Encrypt in place so the tag comes back as its own segment.
    let mut buffer = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(&nonce, b"", &mut buffer)
        .map_err(|e| AgentVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    nonce_bytes.copy_from_slice(&nonce);
    let mut tag_bytes = [0u8; TAG_LEN];
    tag_bytes.copy_from_slice(&tag);

    Ok(EncryptedValue {
        nonce: nonce_bytes,
        tag: tag_bytes,
        ciphertext: buffer,
    })
}

/// Decrypt a value produced by `encrypt`.
///
/// Fails with `TamperedData` if the authentication tag does not verify;
/// corrupted plaintext is never returned.
pub fn decrypt(key: &MasterKey, value: &EncryptedValue) -> Result<Vec<u8>> {
    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| AgentVaultError::TamperedData)?;

    let nonce = Nonce::from_slice(&value.nonce);
    let tag = Tag::from_slice(&value.tag);

    let mut buffer = value.ciphertext.clone();
    cipher
        .decrypt_in_place_detached(nonce, b"", &mut buffer, tag)
        .map_err(|_| AgentVaultError::TamperedData)?;

    Ok(buffer)
}
