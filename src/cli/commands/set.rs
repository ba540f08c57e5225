//! `agent-vault set` — add or overwrite a secret in the vault.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{open_store, Cli};
use crate::errors::{AgentVaultError, Result};
use crate::vault::is_valid_name;

/// Execute the `set` command.
pub fn execute(cli: &Cli, name: &str, value: Option<&str>, desc: Option<&str>) -> Result<()> {
    if !is_valid_name(name) {
        return Err(AgentVaultError::InvalidName(name.to_string()));
    }

    let store = open_store(cli)?;

    // Fail on a missing vault before asking for the value.
    let existed = store.has(name)?;

    // Determine the secret value from one of three sources.
    let secret_value = Zeroizing::new(if let Some(v) = value {
        // Source 1: Inline value on the command line.
        output::warning("Value provided on command line; it may appear in shell history.");
        v.to_string()
    } else if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf.trim_end().to_string()
    } else {
        // Source 3: Interactive masked prompt (default).
        dialoguer::Password::new()
            .with_prompt(format!("Enter value for {name}"))
            .interact()
            .map_err(|e| AgentVaultError::CommandFailed(format!("input prompt: {e}")))?
    });

    store.set(name, &secret_value, desc)?;
    let total = store.list()?.len();

    if existed {
        output::success(&format!("Secret '{name}' updated ({total} total)"));
    } else {
        output::success(&format!("Secret '{name}' added ({total} total)"));
    }

    if secret_value.chars().count() < crate::redact::MIN_KNOWN_VALUE_LEN {
        output::warning(&format!(
            "Values shorter than {} characters are not redacted when files are read.",
            crate::redact::MIN_KNOWN_VALUE_LEN
        ));
    }

    output::tip(&format!("Reference it in files as <agent-vault:{name}>"));

    Ok(())
}
