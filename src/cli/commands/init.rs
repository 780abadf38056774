use std::fs;
use std::path::Path;

use crate::cli::InitArgs;
use crate::config::{Config, WORKSPACE_DIR};
use crate::error::{FixomaxError, Result};
use crate::storage::SqliteStore;

/// Execute the init command.
///
/// # Errors
///
/// Returns an error if the workspace already exists (without `--force`) or
/// the directory or database cannot be created.
pub fn execute(args: &InitArgs) -> Result<()> {
    let workspace = Path::new(WORKSPACE_DIR);

    if workspace.exists() {
        let db_path = Config::default().db_path(workspace);
        if db_path.exists() && !args.force {
            return Err(FixomaxError::AlreadyInitialized { path: db_path });
        }
    } else {
        fs::create_dir(workspace)?;
    }

    // Creates the file and applies the schema migrations.
    let _store = SqliteStore::open(Config::default().db_path(workspace))?;

    let config_path = workspace.join("config.yaml");
    if !config_path.exists() {
        let config = r"# Fixomax Workspace Configuration
# The admin password is a fixed shared secret compared in plaintext.
# It is a demo placeholder, not a credential system.
# admin_password: admin123
# database: issues.db
";
        fs::write(config_path, config)?;
    }

    let gitignore_path = workspace.join(".gitignore");
    if !gitignore_path.exists() {
        let gitignore = r"# Database
*.db
*.db-shm
*.db-wal
";
        fs::write(gitignore_path, gitignore)?;
    }

    println!("Initialized fixomax workspace in {WORKSPACE_DIR}/");
    Ok(())
}
