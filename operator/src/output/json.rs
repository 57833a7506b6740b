//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed object to
//! stdout. Failures reaching `main` use the error object from
//! [`format_error`].

use anyhow::{Context, Result};
use serde_json::{Value, json};

use crate::application::services::reconcile::PassOutcome;
use crate::domain::{ActionError, ActionResults, Status};

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// `{"status": "...", "message": "..."}`; `message` is omitted for active.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn status_value(status: &Status) -> Result<Value> {
    serde_json::to_value(status).context("JSON serialization failed")
}

/// Outcome of a reconciliation pass for the given hook.
#[must_use]
pub fn pass_value(hook: &str, outcome: &PassOutcome) -> Value {
    let mut obj = json!({
        "hook": hook,
        "outcome": outcome.name(),
    });
    if let Some(message) = outcome.message() {
        obj["message"] = Value::String(message);
    }
    obj
}

/// Successful action with its flat result map.
#[must_use]
pub fn action_success_value(action: &str, results: &ActionResults) -> Value {
    json!({
        "action": action,
        "success": true,
        "results": results,
    })
}

/// Failed action with its message and stable code.
#[must_use]
pub fn action_failure_value(action: &str, err: &ActionError) -> Value {
    json!({
        "action": action,
        "success": false,
        "message": err.to_string(),
        "code": err.code(),
    })
}
