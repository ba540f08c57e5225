//! `agent-vault rm` — remove a secret from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{open_store, Cli};
use crate::errors::{AgentVaultError, Result};

/// Execute the `rm` command.
pub fn execute(cli: &Cli, name: &str, force: bool) -> Result<()> {
    let store = open_store(cli)?;

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove secret '{name}'?"))
            .default(false)
            .interact()
            .map_err(|e| AgentVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            return Err(AgentVaultError::UserCancelled);
        }
    }

    if store.remove(name)? {
        output::success(&format!("Removed secret '{name}'"));
    } else {
        output::warning(&format!("No secret named '{name}'"));
    }

    Ok(())
}
