//! Application service — `get-db-info` action.

use anyhow::{Context, Result};

use crate::application::ports::RelationSource;
use crate::domain::{ActionError, ActionResults, db_info, resolve};

/// Run the `get-db-info` action against fresh relation data.
///
/// The inner `Result` is the action's own outcome; a missing database or
/// malformed relation data is an expected failure reported to the caller,
/// not an error.
///
/// # Errors
///
/// Returns an error if the relation data cannot be loaded.
pub fn get_db_info(
    relation: &impl RelationSource,
    show_password: bool,
) -> Result<std::result::Result<ActionResults, ActionError>> {
    let records = relation
        .load()
        .context("cannot load database relation data")?
        .unwrap_or_default();
    Ok(resolve(&records)
        .map_err(ActionError::from)
        .and_then(|credential| db_info(credential.as_ref(), show_password)))
}
