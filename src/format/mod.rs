//! Output formatting for fixomax.
//!
//! Plain text rendering lives in [`text`]; JSON output goes through
//! `serde_json` directly from the command modules.

pub mod text;

pub use text::{
    format_issue_details, format_issue_line, format_metrics, format_priority_badge,
    format_status_icon,
};
