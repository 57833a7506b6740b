//! Declared configuration of the workload and its validation.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use serde::{Deserialize, Serialize};

use crate::domain::error::ValidationError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_SERVER_PORT: u16 = 8000;
pub const RESERVED_SSH_PORT: u16 = 22;

// ── Config schema ────────────────────────────────────────────────────────────

/// Declared configuration, read from `config.yaml`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Configuration {
    /// Port the workload listens on.
    #[serde(default = "default_server_port")]
    pub server_port: u16,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            server_port: default_server_port(),
        }
    }
}

fn default_server_port() -> u16 {
    DEFAULT_SERVER_PORT
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates the declared configuration.
///
/// # Errors
///
/// Returns [`ValidationError::ReservedPort`] when the server port is 22.
pub fn validate(config: &Configuration) -> Result<(), ValidationError> {
    if config.server_port == RESERVED_SSH_PORT {
        return Err(ValidationError::ReservedPort(config.server_port));
    }
    Ok(())
}

// ── Unit tests ───────────────────────────────────────────────────────────────
