//! Command-line interface for fixomax.
//!
//! This module provides the CLI parsing and command routing using clap.

pub mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::ADMIN_PASSWORD_ENV;
use crate::logging;

/// fixomax (fx) - civic issue reporting tool.
#[derive(Parser, Debug)]
#[command(name = "fx")]
#[command(
    author,
    version,
    about = "Civic issue reporting tool (SQLite)",
    long_about = None
)]
pub struct Cli {
    /// Output format: text (default) or json
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a fixomax workspace
    Init(InitArgs),

    /// Submit a new issue (citizen)
    Submit(SubmitArgs),

    /// Show an issue by ID (citizen)
    Show(ShowArgs),

    /// Administrator dashboard operations (password gated)
    Admin(AdminCommand),
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Re-initialize even if a workspace already exists
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Issue title
    #[arg(short, long)]
    pub title: String,

    /// Where the problem is
    #[arg(short, long)]
    pub location: String,

    /// Free-text description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Priority: low, medium, high
    #[arg(short, long, default_value = "medium")]
    pub priority: String,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Issue ID
    pub id: i64,
}

#[derive(Args, Debug)]
pub struct AdminCommand {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AdminSubcommand {
    /// Dashboard: metrics and the filtered issue table
    List(AdminListArgs),

    /// Update the status of an issue
    Update(AdminUpdateArgs),
}

#[derive(Args, Debug)]
pub struct AdminListArgs {
    /// Filter by status (pending, in-progress, resolved; default all)
    #[arg(long)]
    pub status: Option<String>,

    /// Filter by priority (low, medium, high; default all)
    #[arg(long)]
    pub priority: Option<String>,

    /// Search by title or location (case-insensitive substring)
    #[arg(long)]
    pub search: Option<String>,

    /// Admin password
    #[arg(long, env = ADMIN_PASSWORD_ENV, hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct AdminUpdateArgs {
    /// Issue ID
    pub id: i64,

    /// New status (pending, in-progress, resolved)
    pub status: String,

    /// Admin password
    #[arg(long, env = ADMIN_PASSWORD_ENV, hide_env_values = true)]
    pub password: String,
}

/// Run the CLI.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    match cli.command {
        Commands::Init(args) => commands::init::execute(&args)?,
        Commands::Submit(args) => commands::submit::execute(args, cli.json)?,
        Commands::Show(args) => commands::show::execute(&args, cli.json)?,
        Commands::Admin(admin) => match admin.command {
            AdminSubcommand::List(args) => commands::list::execute(&args, cli.json)?,
            AdminSubcommand::Update(args) => commands::update::execute(&args, cli.json)?,
        },
    }

    Ok(())
}
