//! `agent-vault write` — write stdin to a file, restoring placeholders.
//!
//! Named placeholders are restored from the vault.  Fingerprint
//! placeholders are restored from the file currently on disk.  The file is
//! only written when every named placeholder resolves and, unless the
//! vault's settings allow it, every fingerprint does too.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{open_store, Cli};
use crate::config::Settings;
use crate::errors::{AgentVaultError, Result};
use crate::redact::{
    extract_references, named_reference, restore, restore_unvaulted, unvaulted_reference,
};
use crate::vault::format::write_atomic;

/// Execute the `write` command.
pub fn execute(cli: &Cli, file: &Path) -> Result<()> {
    let store = open_store(cli)?;
    let settings = Settings::load(store.config())?;

    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;

    // Check every named reference up front, without decrypting anything.
    let mut problems = Vec::new();
    for name in extract_references(&content) {
        if !store.has(&name)? {
            problems.push(named_reference(&name));
        }
    }
    if !problems.is_empty() {
        return Err(refuse(problems));
    }

    let named = restore(&content, |name| store.get(name))?;
    let named_content = Zeroizing::new(named.content);

    let existing = Zeroizing::new(if file.exists() {
        fs::read_to_string(file)?
    } else {
        String::new()
    });
    let unvaulted = restore_unvaulted(&named_content, &existing);
    let restored = Zeroizing::new(unvaulted.content);

    problems.extend(named.missing_names.iter().map(|n| named_reference(n)));
    if !unvaulted.unmatched_fingerprints.is_empty() {
        if settings.block_unresolved_fingerprints {
            problems.extend(
                unvaulted
                    .unmatched_fingerprints
                    .iter()
                    .map(|fp| unvaulted_reference(fp)),
            );
        } else {
            output::warning(&format!(
                "{} UNVAULTED placeholder(s) could not be matched and were written as-is.",
                unvaulted.unmatched_fingerprints.len()
            ));
        }
    }
    if !problems.is_empty() {
        return Err(refuse(problems));
    }

    write_atomic(file, restored.as_bytes())?;

    let count = named.restored_names.len() + unvaulted.restored_count;
    info!(path = %file.display(), count, "file written");
    output::success(&format!(
        "Wrote {} ({count} secret reference(s) restored)",
        file.display()
    ));

    Ok(())
}

fn refuse(problems: Vec<String>) -> AgentVaultError {
    for p in &problems {
        output::error(&format!("Unresolved placeholder: {p}"));
    }
    AgentVaultError::UnresolvedReferences {
        count: problems.len(),
        names: problems,
    }
}
