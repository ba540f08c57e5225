//! `agent-vault has` — existence check via exit status.

use crate::cli::{open_store, Cli};
use crate::errors::Result;

/// Execute the `has` command.  Returns whether the secret exists.
pub fn execute(cli: &Cli, name: &str) -> Result<bool> {
    open_store(cli)?.has(name)
}
