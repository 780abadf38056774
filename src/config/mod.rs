//! Configuration management for fixomax.
//!
//! Configuration lives in the workspace config file
//! (`.fixomax/config.yaml`); every field has a default so the file is
//! optional. The admin password is a fixed shared secret compared in
//! plaintext. That is a deliberate placeholder from the original design,
//! not a credential system.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Workspace directory created by `fx init`.
pub const WORKSPACE_DIR: &str = ".fixomax";

/// Config file name inside the workspace directory.
pub const CONFIG_FILE: &str = "config.yaml";

/// Environment variable the CLI reads the password attempt from when
/// `--password` is not given.
pub const ADMIN_PASSWORD_ENV: &str = "FIXOMAX_ADMIN_PASSWORD";

const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const DEFAULT_DATABASE: &str = "issues.db";

/// Workspace configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The shared admin secret.
    pub admin_password: String,
    /// Database file name, relative to the workspace directory.
    pub database: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            database: DEFAULT_DATABASE.to_string(),
        }
    }
}

impl Config {
    /// Load the config from `workspace`, falling back to defaults when the
    /// file is absent.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the file exists but cannot be read, or `ConfigParse`
    /// if it is not valid YAML.
    pub fn load(workspace: &Path) -> Result<Self> {
        let path = workspace.join(CONFIG_FILE);
        if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            Ok(serde_yaml::from_str(&raw)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Absolute-ish path to the database file inside `workspace`.
    #[must_use]
    pub fn db_path(&self, workspace: &Path) -> PathBuf {
        workspace.join(&self.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.admin_password, "admin123");
        assert_eq!(config.database, "issues.db");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.admin_password, "admin123");
    }

    #[test]
    fn test_load_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "admin_password: letmein\n",
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.admin_password, "letmein");
        assert_eq!(config.database, "issues.db");
    }

    #[test]
    fn test_load_rejects_malformed_yaml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "admin_password: [\n").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }

    #[test]
    fn test_db_path_joins_workspace() {
        let config = Config::default();
        let path = config.db_path(Path::new(".fixomax"));
        assert_eq!(path, Path::new(".fixomax").join("issues.db"));
    }
}
