//! End-to-end test for opening a legacy dataset that predates the
//! `priority` column.

use assert_cmd::Command;
use predicates::prelude::*;
use rusqlite::Connection;
use tempfile::TempDir;

fn fx(workspace: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fx").unwrap();
    cmd.current_dir(workspace.path());
    cmd.env_remove("FIXOMAX_ADMIN_PASSWORD");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Write a workspace whose database has the original five-column schema.
fn seed_legacy_workspace(workspace: &TempDir) {
    let dir = workspace.path().join(".fixomax");
    std::fs::create_dir(&dir).unwrap();
    let conn = Connection::open(dir.join("issues.db")).unwrap();
    conn.execute(
        "CREATE TABLE issues (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT,
            description TEXT,
            location TEXT,
            status TEXT
        )",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO issues (title, description, location, status) VALUES
            ('Old pothole', 'From before the upgrade', 'Elm St', 'Pending'),
            ('Fallen tree', NULL, 'Park Rd', 'Resolved')",
        [],
    )
    .unwrap();
}

#[test]
fn test_legacy_records_report_medium_priority() {
    let workspace = TempDir::new().unwrap();
    seed_legacy_workspace(&workspace);

    fx(&workspace)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Old pothole"))
        .stdout(predicate::str::contains("Priority:    Medium"));

    fx(&workspace)
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Priority:    Medium"))
        .stdout(predicate::str::contains("Status:      Resolved"));
}

#[test]
fn test_migration_applies_once_across_invocations() {
    let workspace = TempDir::new().unwrap();
    seed_legacy_workspace(&workspace);

    // Every invocation opens the store; none may re-apply the migration.
    for _ in 0..3 {
        fx(&workspace)
            .args(["admin", "list", "--password", "admin123"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Total: 2"));
    }

    // New submissions mix with migrated rows.
    fx(&workspace)
        .args(["submit", "-t", "New pothole", "-l", "5th Ave", "-p", "high"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID is: 3"));

    fx(&workspace)
        .args(["admin", "list", "--priority", "medium", "--password", "admin123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total: 2"))
        .stdout(predicate::str::contains("New pothole").not());
}
