use serde::{Deserialize, Serialize};

use super::VaultConfig;
use crate::errors::{AgentVaultError, Result};

/// Per-vault policy, loaded from `<vault dir>/config.toml`.
///
/// Every field has a sensible default so agent-vault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Run the heuristic unvaulted-secret pass when reading files.
    #[serde(default = "default_true")]
    pub detect_unvaulted: bool,

    /// Refuse to write a file while fingerprint placeholders remain
    /// that cannot be matched against the file on disk.
    #[serde(default = "default_true")]
    pub block_unresolved_fingerprints: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_true() -> bool {
    true
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            detect_unvaulted: default_true(),
            block_unresolved_fingerprints: default_true(),
        }
    }
}

impl Settings {
    /// Load settings for the given vault.
    ///
    /// If the file does not exist, defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(config: &VaultConfig) -> Result<Self> {
        let path = config.settings_path();

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            AgentVaultError::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })?;

        Ok(settings)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_strict() {
        let s = Settings::default();
        assert!(s.detect_unvaulted);
        assert!(s.block_unresolved_fingerprints);
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(&VaultConfig::new(tmp.path())).unwrap();
        assert!(settings.detect_unvaulted);
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
detect_unvaulted = false
block_unresolved_fingerprints = false
"#;
        fs::write(tmp.path().join("config.toml"), config).unwrap();

        let settings = Settings::load(&VaultConfig::new(tmp.path())).unwrap();
        assert!(!settings.detect_unvaulted);
        assert!(!settings.block_unresolved_fingerprints);
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "detect_unvaulted = false\n").unwrap();

        let settings = Settings::load(&VaultConfig::new(tmp.path())).unwrap();
        assert!(!settings.detect_unvaulted);
        assert!(settings.block_unresolved_fingerprints);
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "not valid {{toml").unwrap();

        let result = Settings::load(&VaultConfig::new(tmp.path()));
        assert!(matches!(result, Err(AgentVaultError::ConfigError(_))));
    }
}
