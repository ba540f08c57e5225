//! `agent-vault get` — show a secret's metadata, or its value with `--reveal`.

use crate::cli::output;
use crate::cli::{open_store, Cli};
use crate::errors::{AgentVaultError, Result};

/// Execute the `get` command.
pub fn execute(cli: &Cli, name: &str, reveal: bool) -> Result<()> {
    let store = open_store(cli)?;

    if reveal {
        let value = store
            .get(name)?
            .ok_or_else(|| not_found(name))?;
        println!("{value}");
        return Ok(());
    }

    let meta = store
        .get_metadata(name)?
        .ok_or_else(|| not_found(name))?;
    output::print_metadata(&meta);

    Ok(())
}

fn not_found(name: &str) -> AgentVaultError {
    AgentVaultError::CommandFailed(format!("secret '{name}' not found"))
}
