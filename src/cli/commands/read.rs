//! `agent-vault read` — print a file with secrets replaced by placeholders.

use std::fs;
use std::path::Path;

use crate::cli::output;
use crate::cli::{open_store, Cli};
use crate::config::Settings;
use crate::errors::Result;
use crate::redact::redact_with;

/// Execute the `read` command.
pub fn execute(cli: &Cli, file: &Path) -> Result<()> {
    let store = open_store(cli)?;
    let settings = Settings::load(store.config())?;

    let content = fs::read_to_string(file)?;
    let known_values = store.all_values()?;

    let redaction = redact_with(&content, &known_values, settings.detect_unvaulted);
    print!("{}", redaction.content);

    if redaction.unvaulted_count > 0 {
        output::warning(&format!(
            "{} value(s) in {} look like secrets but are not in the vault (shown as UNVAULTED placeholders).",
            redaction.unvaulted_count,
            file.display()
        ));
        output::tip("Run `agent-vault set <name>` to vault them.");
    }

    Ok(())
}
