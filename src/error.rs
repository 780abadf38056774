//! Error types for `fixomax`.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for fixomax operations.
#[derive(Error, Debug)]
pub enum FixomaxError {
    // === Issue Errors ===
    /// Issue with the specified ID was not found.
    ///
    /// Non-fatal: callers surface this as a normal "not found" outcome.
    #[error("Issue not found: {id}")]
    NotFound { id: i64 },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Multiple validation errors occurred.
    #[error("Validation errors: {errors:?}")]
    ValidationErrors { errors: Vec<ValidationError> },

    /// Invalid status value.
    #[error("Invalid status: {status}")]
    InvalidStatus { status: String },

    /// Invalid priority value.
    #[error("Invalid priority: {priority}")]
    InvalidPriority { priority: String },

    // === Auth Errors ===
    /// Wrong admin password. Role state is left untouched.
    #[error("Invalid admin password")]
    AuthFailed,

    // === Workspace Errors ===
    /// No `.fixomax` workspace in the current directory.
    #[error("Not a fixomax workspace (run `fx init` first)")]
    NotInitialized,

    /// Workspace already exists.
    #[error("Workspace already initialized: {path}")]
    AlreadyInitialized { path: PathBuf },

    // === Storage Errors ===
    /// Underlying SQLite failure. Fatal for the operation in progress.
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Workspace config could not be parsed.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

/// A single field validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl FixomaxError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn from_validation_errors(errors: Vec<ValidationError>) -> Self {
        if errors.len() == 1 {
            let err = &errors[0];
            Self::Validation {
                field: err.field.clone(),
                reason: err.message.clone(),
            }
        } else {
            Self::ValidationErrors { errors }
        }
    }
}

/// Result type using `FixomaxError`.
pub type Result<T> = std::result::Result<T, FixomaxError>;
