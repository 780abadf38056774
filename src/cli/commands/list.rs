//! Admin dashboard command.
//!
//! Authenticates through the session state machine, then renders the
//! metrics block and the filtered issue table. Counts reflect the filtered
//! view, not global totals.

use std::str::FromStr;

use crate::cli::AdminListArgs;
use crate::error::Result;
use crate::format::{format_issue_line, format_metrics};
use crate::model::{Priority, Status};
use crate::query::{self, FilterCriteria};

/// Execute the admin list command.
///
/// # Errors
///
/// Returns `AuthFailed` for a wrong password, or an error if the workspace
/// is missing, a filter value does not parse, or the query fails.
pub fn execute(args: &AdminListArgs, json: bool) -> Result<()> {
    let (config, store) = super::open_workspace()?;
    let _session = super::unlock_admin(&config, &args.password)?;

    let criteria = build_criteria(args)?;
    let records = store.list_all()?;
    let view = query::filter_issues(&records, &criteria);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", format_metrics(&view.counts));
        if view.issues.is_empty() {
            println!("No issues reported yet.");
        } else {
            for issue in &view.issues {
                println!("{}", format_issue_line(issue));
            }
        }
    }

    Ok(())
}

/// Convert CLI args to filter criteria. `all` (or omission) means no filter.
fn build_criteria(args: &AdminListArgs) -> Result<FilterCriteria> {
    let status = match args.status.as_deref() {
        None => None,
        Some(s) if s.eq_ignore_ascii_case("all") => None,
        Some(s) => Some(Status::from_str(s)?),
    };

    let priority = match args.priority.as_deref() {
        None => None,
        Some(p) if p.eq_ignore_ascii_case("all") => None,
        Some(p) => Some(Priority::from_str(p)?),
    };

    Ok(FilterCriteria {
        status,
        priority,
        search: args.search.clone(),
    })
}
