//! Redaction and restoration of secret values in text files.
//!
//! Reading a file goes through `redact`: every known vault value becomes
//! `<agent-vault:NAME>`, and any other value that looks like a secret
//! becomes `<agent-vault:UNVAULTED:sha256:XXXXXXXX>`.  Writing a file goes
//! through `restore` (named placeholders, resolved via the vault) and
//! `restore_unvaulted` (fingerprints, resolved against the file currently
//! on disk).
//!
//! Everything here is a pure function over its inputs.
//!
//! - `reference`: placeholder grammar
//! - `grammar`: static tables of secret-token grammars and English bigrams
//! - `heuristics`: entropy, structure, and word-likeness checks
//! - `extract`: per-line key/value syntaxes that yield a candidate value
//! - `redactor` / `restorer`: the two pipelines

pub mod extract;
pub mod grammar;
pub mod heuristics;
pub mod redactor;
pub mod reference;
pub mod restorer;

pub use redactor::{fingerprint, redact, redact_with, Redaction, MIN_KNOWN_VALUE_LEN};
pub use reference::{named_reference, unvaulted_reference};
pub use restorer::{
    extract_references, restore, restore_unvaulted, Restoration, UnvaultedRestoration,
};
