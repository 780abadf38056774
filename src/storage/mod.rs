//! `SQLite` storage layer for fixomax.
//!
//! Owns the single `issues` table. Each operation is one atomic round trip;
//! WAL mode allows concurrent readers, and concurrent same-id updates are
//! last-write-wins via `SQLite`'s row-level atomicity.
//!
//! Schema changes run as explicit versioned migrations driven by
//! `PRAGMA user_version`, applied once at open. A legacy `issues.db` created
//! before the `priority` column existed is backfilled with `Medium` exactly
//! once; repeated opens are no-ops.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::{debug, info};

use crate::error::{FixomaxError, Result};
use crate::model::{Issue, NewIssue, Status};
use crate::validation::SubmissionValidator;

/// Current schema version, recorded in `PRAGMA user_version`.
const SCHEMA_VERSION: i64 = 2;

/// SQLite-backed issue store.
///
/// Sole owner of all persisted `Issue` records; callers get transient
/// snapshots only.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path` and apply pending migrations.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the database cannot be opened or migrated.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory database (for tests).
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the database cannot be created or migrated.
    pub fn open_in_memory() -> Result<Self> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.migrate()?;
        Ok(store)
    }

    /// Create a new issue with `status = Pending` and return the assigned id.
    ///
    /// Not idempotent: resubmission creates a duplicate record by design.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an empty title or location, or `Storage` on
    /// insert failure.
    pub fn create_issue(&self, submission: &NewIssue) -> Result<i64> {
        SubmissionValidator::validate(submission).map_err(FixomaxError::from_validation_errors)?;

        self.conn.execute(
            "INSERT INTO issues (title, description, location, status, priority)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                submission.title,
                submission.description,
                submission.location,
                Status::Pending.as_str(),
                submission.priority.as_str(),
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, title = %submission.title, "created issue");
        Ok(id)
    }

    /// Return every persisted record.
    ///
    /// Order is rowid scan order (insertion-adjacent) and is not a semantic
    /// guarantee to callers.
    ///
    /// # Errors
    ///
    /// Returns `Storage` on query failure.
    pub fn list_all(&self) -> Result<Vec<Issue>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, location, status, priority FROM issues",
        )?;
        let issues = stmt
            .query_map([], Self::parse_issue_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(issues)
    }

    /// Point lookup by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has this id, or `Storage` on query
    /// failure.
    pub fn get_issue(&self, id: i64) -> Result<Issue> {
        self.conn
            .query_row(
                "SELECT id, title, description, location, status, priority
                 FROM issues WHERE id = ?1",
                params![id],
                Self::parse_issue_row,
            )
            .optional()?
            .ok_or(FixomaxError::NotFound { id })
    }

    /// Overwrite the `status` field of one record. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no record has this id, or `Storage` on update
    /// failure.
    pub fn update_status(&self, id: i64, status: Status) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE issues SET status = ?1 WHERE id = ?2",
            params![status.as_str(), id],
        )?;
        if changed == 0 {
            return Err(FixomaxError::NotFound { id });
        }
        debug!(id, status = status.as_str(), "updated issue status");
        Ok(())
    }

    // ========================================================================
    // Migrations
    // ========================================================================

    fn migrate(&self) -> Result<()> {
        let version: i64 = self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))?;

        if version < 1 {
            // v1: the original five-column table. IF NOT EXISTS keeps a
            // pre-existing legacy dataset untouched.
            self.conn.execute(
                "CREATE TABLE IF NOT EXISTS issues (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    title TEXT NOT NULL,
                    description TEXT NOT NULL DEFAULT '',
                    location TEXT NOT NULL,
                    status TEXT NOT NULL
                )",
                [],
            )?;
            debug!("applied migration v1 (issues table)");
        }

        if version < 2 {
            // v2: additive priority column. The column check guards legacy
            // databases that already carry it but report user_version 0.
            if self.has_column("issues", "priority")? {
                debug!("migration v2 skipped (priority column present)");
            } else {
                self.conn.execute(
                    "ALTER TABLE issues ADD COLUMN priority TEXT NOT NULL DEFAULT 'Medium'",
                    [],
                )?;
                info!("applied migration v2 (priority column, backfilled Medium)");
            }
        }

        if version < SCHEMA_VERSION {
            self.conn
                .pragma_update(None, "user_version", SCHEMA_VERSION)?;
        }
        Ok(())
    }

    fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        let mut stmt = self.conn.prepare(&format!("PRAGMA table_info({table})"))?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let name: String = row.get(1)?;
            if name == column {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Parse an `Issue` from a database row.
    ///
    /// Legacy rows may hold NULL descriptions and unexpected enum text;
    /// both fall back to defaults rather than failing the whole scan.
    fn parse_issue_row(row: &Row<'_>) -> rusqlite::Result<Issue> {
        let status: String = row.get(4)?;
        let priority: String = row.get(5)?;
        Ok(Issue {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            location: row.get(3)?,
            status: status.parse().unwrap_or_default(),
            priority: priority.parse().unwrap_or_default(),
        })
    }
}
