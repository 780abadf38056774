//! One module per CLI command, plus shared workspace helpers.

pub mod init;
pub mod list;
pub mod show;
pub mod submit;
pub mod update;

use std::path::Path;

use crate::config::{Config, WORKSPACE_DIR};
use crate::error::{FixomaxError, Result};
use crate::session::Session;
use crate::storage::SqliteStore;

/// Locate the workspace in the current directory, load its config, and open
/// the store.
///
/// # Errors
///
/// Returns `NotInitialized` if there is no `.fixomax` directory, or any
/// config/storage error from opening the workspace.
pub fn open_workspace() -> Result<(Config, SqliteStore)> {
    let workspace = Path::new(WORKSPACE_DIR);
    if !workspace.exists() {
        return Err(FixomaxError::NotInitialized);
    }
    let config = Config::load(workspace)?;
    let store = SqliteStore::open(config.db_path(workspace))?;
    Ok((config, store))
}

/// Drive the session state machine through the admin login gate.
///
/// # Errors
///
/// Returns `AuthFailed` when the password attempt is wrong.
pub fn unlock_admin(config: &Config, password: &str) -> Result<Session> {
    let mut session = Session::new();
    session.select_admin();
    session.submit_password(password, &config.admin_password)?;
    debug_assert!(session.is_admin_unlocked());
    Ok(session)
}
