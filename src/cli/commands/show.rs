use crate::cli::ShowArgs;
use crate::error::{FixomaxError, Result};
use crate::format::format_issue_details;

/// Execute the show command.
///
/// A missing id is a normal outcome, not a failure: the citizen gets a
/// "not found" message and the command still succeeds.
///
/// # Errors
///
/// Returns an error if the workspace is missing or the lookup fails for a
/// reason other than the record not existing.
pub fn execute(args: &ShowArgs, json: bool) -> Result<()> {
    let (_config, store) = super::open_workspace()?;

    match store.get_issue(args.id) {
        Ok(issue) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&issue)?);
            } else {
                println!("{}", format_issue_details(&issue));
            }
        }
        Err(FixomaxError::NotFound { .. }) => {
            println!("No issue found with that ID.");
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
