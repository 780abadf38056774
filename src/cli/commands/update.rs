use std::str::FromStr;

use crate::cli::AdminUpdateArgs;
use crate::error::Result;
use crate::model::Status;

/// Execute the admin update command.
///
/// The status value is parsed to the enum here; the store never sees an
/// out-of-range value.
///
/// # Errors
///
/// Returns `AuthFailed` for a wrong password, `NotFound` if the id does not
/// exist, or an error if the workspace is missing or the update fails.
pub fn execute(args: &AdminUpdateArgs, json: bool) -> Result<()> {
    let status = Status::from_str(&args.status)?;

    let (config, store) = super::open_workspace()?;
    let _session = super::unlock_admin(&config, &args.password)?;

    store.update_status(args.id, status)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "id": args.id,
                "status": status,
            }))?
        );
    } else {
        println!("Status of issue {} set to {status}.", args.id);
    }

    Ok(())
}
