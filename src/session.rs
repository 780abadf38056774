//! Session and role state for the interactive surfaces.
//!
//! Admin operations (filter/search, metrics, status update) are reachable
//! only when the active role is `Admin` and the session has been unlocked
//! with the configured password. The password check is plaintext equality
//! with unlimited attempts, matching the tool's shared-secret design.

use tracing::warn;

use crate::error::{FixomaxError, Result};

/// Which view the session is operating as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Citizen,
    Admin,
}

/// Process-wide session state; lifecycle is one interactive session.
#[derive(Debug, Clone, Default)]
pub struct Session {
    role: Role,
    admin_authenticated: bool,
    password_attempt: String,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// True when admin operations are reachable.
    #[must_use]
    pub const fn is_admin_unlocked(&self) -> bool {
        matches!(self.role, Role::Admin) && self.admin_authenticated
    }

    /// Switch to the citizen view. Does not touch the authentication flag;
    /// only `logout` clears it.
    pub fn select_citizen(&mut self) {
        self.role = Role::Citizen;
        self.password_attempt.clear();
    }

    /// Switch to the admin view. Re-entering while still marked
    /// authenticated keeps the unlock.
    pub fn select_admin(&mut self) {
        self.role = Role::Admin;
        self.password_attempt.clear();
    }

    /// Attempt to unlock the admin view.
    ///
    /// # Errors
    ///
    /// Returns `AuthFailed` when the attempt does not match the configured
    /// password, or when the admin view is not active. State is unchanged
    /// on failure and attempts are unlimited.
    pub fn submit_password(&mut self, attempt: &str, configured: &str) -> Result<()> {
        if self.role != Role::Admin {
            return Err(FixomaxError::AuthFailed);
        }
        self.password_attempt = attempt.to_string();
        if attempt == configured {
            self.admin_authenticated = true;
            Ok(())
        } else {
            warn!("admin password rejected");
            Err(FixomaxError::AuthFailed)
        }
    }

    /// Leave the admin view, clearing the authentication flag.
    pub fn logout(&mut self) {
        self.admin_authenticated = false;
        self.select_citizen();
    }
}
