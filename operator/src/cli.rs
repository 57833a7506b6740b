//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, OutputFlags};
use crate::commands;
use crate::domain::RelationDataError;
use crate::infra::load_settings;

/// Reconciliation controller for the FastAPI demo server workload
#[derive(Parser)]
#[command(
    name = "fastapi-demo-operator",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Handle a lifecycle event with one reconciliation pass
    Hook(commands::hook::HookArgs),

    /// Print the current unit status
    CollectStatus,

    /// Run an operator action
    #[command(subcommand)]
    Action(commands::action::ActionCommand),
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if settings or inputs cannot be loaded, or if a hook
    /// meets malformed relation data.
    pub async fn run(self) -> Result<()> {
        let Cli {
            json,
            quiet,
            no_color,
            command,
        } = self;
        let settings = load_settings(std::env::vars())?;
        let app = AppContext::new(
            &OutputFlags {
                no_color,
                quiet,
                json,
            },
            &settings,
        )?;

        match command {
            Command::Hook(args) => commands::hook::run(&app, &args).await,
            Command::CollectStatus => commands::status::run(&app).await,
            Command::Action(cmd) => commands::action::run(&app, &cmd),
        }
    }
}

/// Stable code for an error reaching `main`, used in JSON error output.
#[must_use]
pub fn error_code(err: &anyhow::Error) -> &'static str {
    if err.chain().any(|cause| cause.is::<RelationDataError>()) {
        "relation_data"
    } else {
        "operator_error"
    }
}
