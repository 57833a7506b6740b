//! Operator actions.

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;

#[derive(Subcommand)]
pub enum ActionCommand {
    /// Show the database connection details
    GetDbInfo {
        /// Include the username and password
        #[arg(long)]
        show_password: bool,
    },
}

impl ActionCommand {
    fn name(&self) -> &'static str {
        match self {
            Self::GetDbInfo { .. } => "get-db-info",
        }
    }
}

/// Run an action. Expected failures are rendered, not returned.
///
/// # Errors
///
/// Returns an error if relation data cannot be loaded.
pub fn run(app: &AppContext, cmd: &ActionCommand) -> Result<()> {
    let outcome = match cmd {
        ActionCommand::GetDbInfo { show_password } => {
            app.controller.on_action_get_db_info(*show_password)?
        }
    };
    app.renderer().render_action(cmd.name(), &outcome)
}
