//! Result builders for operator actions.

use std::collections::BTreeMap;

use crate::domain::error::ActionError;
use crate::domain::relation::RelationCredential;

/// Flat string-keyed action result.
pub type ActionResults = BTreeMap<String, String>;

/// Build the `get-db-info` result.
///
/// Host and port are always included; username and password only when
/// `show_password` is set.
///
/// # Errors
///
/// Returns [`ActionError::NoDatabaseConnected`] when no credential is resolved.
pub fn db_info(
    credential: Option<&RelationCredential>,
    show_password: bool,
) -> Result<ActionResults, ActionError> {
    let cred = credential.ok_or(ActionError::NoDatabaseConnected)?;

    let mut results = ActionResults::new();
    results.insert("db-host".to_string(), cred.host.clone());
    results.insert("db-port".to_string(), cred.port.clone());
    if show_password {
        results.insert("db-username".to_string(), cred.username.clone());
        results.insert("db-password".to_string(), cred.password.clone());
    }
    Ok(results)
}
