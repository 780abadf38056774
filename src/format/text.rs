//! Text formatting functions for fixomax.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - Status icons (○ ◐ ✓)
//! - Priority badges ([Low], [Medium], [High])
//! - Issue line and detail formatting
//! - The dashboard metrics block

use crate::model::{Issue, Priority, Status};
use crate::query::StatusCounts;

/// Status icon characters.
pub mod icons {
    /// Pending - awaiting triage (hollow circle).
    pub const PENDING: &str = "○";
    /// In progress - active work (half-filled).
    pub const IN_PROGRESS: &str = "◐";
    /// Resolved - completed (checkmark).
    pub const RESOLVED: &str = "✓";
}

/// Return the icon character for a status.
#[must_use]
pub const fn format_status_icon(status: Status) -> &'static str {
    match status {
        Status::Pending => icons::PENDING,
        Status::InProgress => icons::IN_PROGRESS,
        Status::Resolved => icons::RESOLVED,
    }
}

/// Format priority as a bracketed badge.
#[must_use]
pub fn format_priority_badge(priority: Priority) -> String {
    format!("[{}]", priority.as_str())
}

/// Format a single-line issue summary.
///
/// Format: `{icon} #{id} [{priority}] {title} ({location})`
#[must_use]
pub fn format_issue_line(issue: &Issue) -> String {
    format!(
        "{} #{} {} {} ({})",
        format_status_icon(issue.status),
        issue.id,
        format_priority_badge(issue.priority),
        issue.title,
        issue.location,
    )
}

/// Format the full detail view for `fx show`.
#[must_use]
pub fn format_issue_details(issue: &Issue) -> String {
    format!(
        "Issue #{}\n\
         Title:       {}\n\
         Description: {}\n\
         Location:    {}\n\
         Priority:    {}\n\
         Status:      {}",
        issue.id, issue.title, issue.description, issue.location, issue.priority, issue.status,
    )
}

/// Format the dashboard metrics block over a filtered view.
#[must_use]
pub fn format_metrics(counts: &StatusCounts) -> String {
    format!(
        "Total: {} | Pending: {} | In Progress: {} | Resolved: {}",
        counts.total, counts.pending, counts.in_progress, counts.resolved,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_issue() -> Issue {
        Issue {
            id: 3,
            title: "Pothole".to_string(),
            description: "Large pothole".to_string(),
            location: "5th Ave".to_string(),
            status: Status::Pending,
            priority: Priority::High,
        }
    }

    #[test]
    fn test_status_icons() {
        assert_eq!(format_status_icon(Status::Pending), "○");
        assert_eq!(format_status_icon(Status::InProgress), "◐");
        assert_eq!(format_status_icon(Status::Resolved), "✓");
    }

    #[test]
    fn test_format_priority_badge() {
        assert_eq!(format_priority_badge(Priority::Low), "[Low]");
        assert_eq!(format_priority_badge(Priority::Medium), "[Medium]");
        assert_eq!(format_priority_badge(Priority::High), "[High]");
    }

    #[test]
    fn test_format_issue_line() {
        let line = format_issue_line(&make_test_issue());
        assert_eq!(line, "○ #3 [High] Pothole (5th Ave)");
    }

    #[test]
    fn test_format_issue_details() {
        let details = format_issue_details(&make_test_issue());
        assert!(details.contains("Issue #3"));
        assert!(details.contains("Title:       Pothole"));
        assert!(details.contains("Status:      Pending"));
        assert!(details.contains("Priority:    High"));
    }

    #[test]
    fn test_format_metrics() {
        let counts = StatusCounts {
            total: 4,
            pending: 2,
            in_progress: 1,
            resolved: 1,
        };
        assert_eq!(
            format_metrics(&counts),
            "Total: 4 | Pending: 2 | In Progress: 1 | Resolved: 1"
        );
    }
}
