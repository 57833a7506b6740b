//! `collect-status` command.

use anyhow::Result;

use crate::app::AppContext;

/// Derive the unit status from fresh inputs and render it.
///
/// # Errors
///
/// Returns an error if inputs cannot be loaded.
pub async fn run(app: &AppContext) -> Result<()> {
    let status = app.controller.on_status_collect().await?;
    app.renderer().render_status(&status)
}
