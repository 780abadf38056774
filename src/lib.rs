//! fixomax - civic issue reporting library
//!
//! This crate provides the core functionality for the `fx` CLI tool:
//! citizens submit issues and look them up by id; an administrator, behind
//! a static password gate, filters the full set, reads aggregate counts,
//! and updates status.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Data types (Issue, Status, Priority)
//! - [`storage`] - `SQLite` issue store with versioned migrations
//! - [`query`] - Pure filter/aggregate engine for the admin dashboard
//! - [`session`] - Role and login-gate state machine
//! - [`config`] - Workspace configuration
//! - [`error`] - Error types and handling
//! - [`format`] - Output formatting (text, JSON)
//! - [`validation`] - Submission validation helpers

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod query;
pub mod session;
pub mod storage;
pub mod validation;

pub use error::{FixomaxError, Result};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
