//! Cryptographic primitives for agent-vault.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption into separate nonce, tag, and
//!   ciphertext segments (`encryption`)
//! - The randomly generated 256-bit `MasterKey` (`keys`)

pub mod encryption;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, MasterKey, ...};
pub use encryption::{decrypt, encrypt, EncryptedValue};
pub use keys::MasterKey;
