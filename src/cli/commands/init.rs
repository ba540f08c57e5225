//! `agent-vault init` — create the vault key and data file.

use crate::cli::output;
use crate::cli::{open_store, Cli};
use crate::errors::Result;
use crate::vault::InitOutcome;

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let store = open_store(cli)?;
    let dir = store.config().dir().display().to_string();

    match store.init()? {
        InitOutcome::Created => {
            output::success(&format!("Vault created at {dir}"));
            output::tip("Run `agent-vault set <name>` to add a secret.");
        }
        InitOutcome::AlreadyInitialized => {
            output::info(&format!("Vault already initialized at {dir}"));
        }
    }

    Ok(())
}
