//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::config::VaultConfig;
use crate::errors::Result;
use crate::vault::VaultStore;

/// agent-vault CLI: let agents edit config files without seeing secrets.
#[derive(Parser)]
#[command(
    name = "agent-vault",
    about = "Secret-aware file access for coding agents",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault directory (default: ~/.agent-vault)
    #[arg(long, env = "AGENT_VAULT_DIR", global = true)]
    pub vault_dir: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Initialize the vault (safe to run repeatedly)
    Init,

    /// Set a secret (add or overwrite)
    Set {
        /// Secret name (lowercase letters, digits, hyphens)
        name: String,
        /// Secret value (omit for piped input or interactive prompt)
        value: Option<String>,
        /// Short description shown by `list`
        #[arg(short, long)]
        desc: Option<String>,
    },

    /// Show a secret's metadata (or its value with --reveal)
    Get {
        /// Secret name
        name: String,
        /// Print the plaintext value
        #[arg(long)]
        reveal: bool,
    },

    /// Exit 0 if a secret exists, 1 otherwise
    Has {
        /// Secret name
        name: String,
    },

    /// List all secrets
    List,

    /// Remove a secret
    Rm {
        /// Secret name
        name: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Print a file with secrets replaced by placeholders
    Read {
        /// File to read
        file: PathBuf,
    },

    /// Write stdin to a file, restoring placeholders to real values
    Write {
        /// File to write
        file: PathBuf,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Resolve the vault location from `--vault-dir` / `AGENT_VAULT_DIR`,
/// falling back to the home-relative default.
pub fn vault_config(cli: &Cli) -> Result<VaultConfig> {
    match &cli.vault_dir {
        Some(dir) => Ok(VaultConfig::new(dir)),
        None => VaultConfig::from_env(),
    }
}

/// Build a store handle for the resolved vault location.
pub fn open_store(cli: &Cli) -> Result<VaultStore> {
    Ok(VaultStore::new(vault_config(cli)?))
}
