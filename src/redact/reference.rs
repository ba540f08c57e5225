//! Placeholder grammar.
//!
//! ```text
//! <agent-vault:NAME>                          NAME = [a-z0-9]([a-z0-9-]*[a-z0-9])?
//! <agent-vault:UNVAULTED:sha256:HHHHHHHH>     H    = [0-9a-f]
//! ```
//!
//! Uppercase and underscore names never match, so unrelated
//! angle-bracket syntax in files is left alone.

use std::sync::LazyLock;

use regex::Regex;

/// Every placeholder starts with this.
pub const REFERENCE_PREFIX: &str = "<agent-vault:";

pub(crate) static NAMED_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<agent-vault:([a-z0-9](?:[a-z0-9-]*[a-z0-9])?)>").expect("static regex")
});

pub(crate) static UNVAULTED_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<agent-vault:UNVAULTED:sha256:([0-9a-f]{8})>").expect("static regex")
});

/// Any placeholder, named or fingerprinted.
pub(crate) static ANY_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"<agent-vault:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?|UNVAULTED:sha256:[0-9a-f]{8})>",
    )
    .expect("static regex")
});

/// `<agent-vault:NAME>`
pub fn named_reference(name: &str) -> String {
    format!("{REFERENCE_PREFIX}{name}>")
}

/// `<agent-vault:UNVAULTED:sha256:FINGERPRINT>`
pub fn unvaulted_reference(fingerprint: &str) -> String {
    format!("{REFERENCE_PREFIX}UNVAULTED:sha256:{fingerprint}>")
}
