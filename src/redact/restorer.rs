//! Restoration: placeholders in, real values out.
//!
//! Named placeholders are resolved through a lookup function (normally
//! `VaultStore::get`).  Fingerprint placeholders are resolved by
//! re-running unvaulted detection over the file currently on disk and
//! matching fingerprints.  Anything that cannot be resolved is left in
//! place and reported, so callers can list every problem at once.

use std::collections::{BTreeSet, HashMap};

use regex::Captures;
use tracing::debug;

use super::redactor::{detect_in_line, fingerprint, split_line_ending};
use super::reference::{NAMED_REFERENCE, UNVAULTED_REFERENCE};
use crate::errors::Result;

/// Output of `restore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restoration {
    pub content: String,
    /// Distinct names that were substituted, in order of first use.
    pub restored_names: Vec<String>,
    /// Distinct names with no value, in order of first use.
    pub missing_names: Vec<String>,
}

impl Restoration {
    pub fn is_complete(&self) -> bool {
        self.missing_names.is_empty()
    }
}

/// Output of `restore_unvaulted`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnvaultedRestoration {
    pub content: String,
    /// Number of fingerprint placeholders substituted.
    pub restored_count: usize,
    /// Distinct fingerprints that had no match, in order of first use.
    pub unmatched_fingerprints: Vec<String>,
}

impl UnvaultedRestoration {
    pub fn is_complete(&self) -> bool {
        self.unmatched_fingerprints.is_empty()
    }
}

/// Replace every `<agent-vault:NAME>` with the value `lookup` returns.
///
/// `lookup` is called once per distinct name.  `Ok(None)` leaves the
/// placeholder untouched and records the name as missing; an `Err`
/// (e.g. tampered vault data) aborts the whole restore.
pub fn restore<F>(content: &str, mut lookup: F) -> Result<Restoration>
where
    F: FnMut(&str) -> Result<Option<String>>,
{
    let mut resolved: HashMap<String, Option<String>> = HashMap::new();
    let mut restored_names = Vec::new();
    let mut missing_names = Vec::new();

    let mut out = String::with_capacity(content.len());
    let mut last = 0;

    for caps in NAMED_REFERENCE.captures_iter(content) {
        let (whole, name) = whole_and_group(&caps);
        out.push_str(&content[last..whole.start()]);
        last = whole.end();

        if !resolved.contains_key(name) {
            let value = lookup(name)?;
            if value.is_some() {
                restored_names.push(name.to_string());
            } else {
                missing_names.push(name.to_string());
            }
            resolved.insert(name.to_string(), value);
        }

        match resolved.get(name).and_then(Option::as_deref) {
            Some(value) => out.push_str(value),
            None => out.push_str(whole.as_str()),
        }
    }
    out.push_str(&content[last..]);

    debug!(
        restored = restored_names.len(),
        missing = missing_names.len(),
        "restored named references"
    );
    Ok(Restoration {
        content: out,
        restored_names,
        missing_names,
    })
}

/// Replace every fingerprint placeholder with the value in
/// `existing_content` that has the same fingerprint.
pub fn restore_unvaulted(content: &str, existing_content: &str) -> UnvaultedRestoration {
    let table = fingerprint_table(existing_content);

    let mut restored_count = 0;
    let mut unmatched_fingerprints: Vec<String> = Vec::new();

    let mut out = String::with_capacity(content.len());
    let mut last = 0;

    for caps in UNVAULTED_REFERENCE.captures_iter(content) {
        let (whole, fp) = whole_and_group(&caps);
        out.push_str(&content[last..whole.start()]);
        last = whole.end();

        match table.get(fp) {
            Some(value) => {
                out.push_str(value);
                restored_count += 1;
            }
            None => {
                out.push_str(whole.as_str());
                if !unmatched_fingerprints.iter().any(|f| f == fp) {
                    unmatched_fingerprints.push(fp.to_string());
                }
            }
        }
    }
    out.push_str(&content[last..]);

    debug!(
        restored_count,
        unmatched = unmatched_fingerprints.len(),
        "restored unvaulted references"
    );
    UnvaultedRestoration {
        content: out,
        restored_count,
        unmatched_fingerprints,
    }
}

/// Every distinct name referenced by a named placeholder.
pub fn extract_references(content: &str) -> BTreeSet<String> {
    NAMED_REFERENCE
        .captures_iter(content)
        .map(|caps| whole_and_group(&caps).1.to_string())
        .collect()
}

/// Fingerprint -> original value for every secret-like value detected in
/// `content`.  The first value wins if two share a fingerprint.
fn fingerprint_table(content: &str) -> HashMap<String, &str> {
    let mut table = HashMap::new();
    for raw_line in content.split_inclusive('\n') {
        let (line, _) = split_line_ending(raw_line);
        if let Some(detection) = detect_in_line(line) {
            table
                .entry(fingerprint(detection.text))
                .or_insert(detection.text);
        }
    }
    table
}

/// The full match and its first capture group.
fn whole_and_group<'h>(caps: &Captures<'h>) -> (regex::Match<'h>, &'h str) {
    let whole = caps.get_match();
    let group = caps.get(1).map_or("", |m| m.as_str());
    (whole, group)
}
