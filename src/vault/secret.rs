//! SecretEntry and SecretMetadata types stored inside a vault.
//!
//! Each entry holds the encrypted value, an optional description, and
//! its creation timestamp.  The entry's name is the key it is stored
//! under in `vault.json`.  The `value` field uses custom serde helpers
//! so it serializes as `nonce_hex:tag_hex:ciphertext_hex`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::crypto::EncryptedValue;

/// A single encrypted secret stored in the vault.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretEntry {
    /// The encrypted value segments.
    #[serde(serialize_with = "wire_encode", deserialize_with = "wire_decode")]
    pub value: EncryptedValue,

    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    /// When this value was last written.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Metadata about a secret (no value).
///
/// Returned by `VaultStore::get_metadata` and `VaultStore::list` so
/// callers can display secrets without touching any plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretMetadata {
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Plaintext length in bytes.
    pub length: usize,
}

impl SecretMetadata {
    pub(crate) fn from_entry(name: &str, entry: &SecretEntry) -> Self {
        Self {
            name: name.to_string(),
            description: entry.desc.clone(),
            created_at: entry.created_at,
            length: entry.value.plaintext_len(),
        }
    }
}

/// Check a secret name against `^[a-z0-9]([a-z0-9-]*[a-z0-9])?$`.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        && !name.starts_with('-')
        && !name.ends_with('-')
}

// ---------------------------------------------------------------------------
// Serde helpers for the `nonce:tag:ciphertext` value field
// ---------------------------------------------------------------------------

fn wire_encode<S>(value: &EncryptedValue, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.to_wire())
}

fn wire_decode<'de, D>(deserializer: D) -> std::result::Result<EncryptedValue, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    EncryptedValue::from_wire(&s).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(is_valid_name("a"));
        assert!(is_valid_name("openai-key"));
        assert!(is_valid_name("db2"));
        assert!(is_valid_name("9-lives"));
        assert!(is_valid_name("a--b"));
    }

    #[test]
    fn invalid_names() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("-key"));
        assert!(!is_valid_name("key-"));
        assert!(!is_valid_name("-"));
        assert!(!is_valid_name("API_KEY"));
        assert!(!is_valid_name("Key"));
        assert!(!is_valid_name("my_key"));
        assert!(!is_valid_name("my.key"));
        assert!(!is_valid_name("my key"));
    }
}
