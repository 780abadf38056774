//! Filter/aggregate engine for the admin dashboard.
//!
//! Pure and deterministic: identical `(records, criteria)` always yields
//! identical output, and nothing here touches storage.

use serde::Serialize;

use crate::model::{Issue, Priority, Status};

/// Criteria for narrowing the admin view. `None` means "All"; an empty
/// search query matches everything.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    /// Case-insensitive substring matched against title OR location.
    pub search: Option<String>,
}

impl FilterCriteria {
    fn matches(&self, issue: &Issue) -> bool {
        if let Some(status) = self.status {
            if issue.status != status {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if issue.priority != priority {
                return false;
            }
        }

        if let Some(ref query) = self.search {
            let query = query.to_lowercase();
            if !query.is_empty()
                && !issue.title.to_lowercase().contains(&query)
                && !issue.location.to_lowercase().contains(&query)
            {
                return false;
            }
        }

        true
    }
}

/// Summary counts over a visible set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl StatusCounts {
    /// Tally counts over `issues`.
    #[must_use]
    pub fn tally(issues: &[Issue]) -> Self {
        let mut counts = Self {
            total: issues.len(),
            ..Self::default()
        };
        for issue in issues {
            match issue.status {
                Status::Pending => counts.pending += 1,
                Status::InProgress => counts.in_progress += 1,
                Status::Resolved => counts.resolved += 1,
            }
        }
        counts
    }
}

/// The visible subset plus its summary counts.
#[derive(Debug, Clone, Serialize)]
pub struct FilteredView {
    pub issues: Vec<Issue>,
    pub counts: StatusCounts,
}

/// Apply `criteria` to `records`.
///
/// Filters compose with logical AND, and `counts` are computed over the
/// post-filter visible set, not the unfiltered records.
#[must_use]
pub fn filter_issues(records: &[Issue], criteria: &FilterCriteria) -> FilteredView {
    let issues: Vec<Issue> = records
        .iter()
        .filter(|issue| criteria.matches(issue))
        .cloned()
        .collect();
    let counts = StatusCounts::tally(&issues);
    FilteredView { issues, counts }
}
