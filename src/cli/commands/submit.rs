use std::str::FromStr;

use crate::cli::SubmitArgs;
use crate::error::Result;
use crate::model::{NewIssue, Priority};

/// Execute the submit command.
///
/// # Errors
///
/// Returns an error if validation fails, the workspace is missing, or the
/// issue cannot be created.
pub fn execute(args: SubmitArgs, json: bool) -> Result<()> {
    let priority = Priority::from_str(&args.priority)?;

    let submission = NewIssue {
        title: args.title,
        description: args.description,
        location: args.location,
        priority,
    };

    let (_config, store) = super::open_workspace()?;
    let id = store.create_issue(&submission)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "id": id }))?
        );
    } else {
        println!("Issue submitted. Your issue ID is: {id}");
    }

    Ok(())
}
