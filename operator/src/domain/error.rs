//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Validation errors ─────────────────────────────────────────────────────────

/// User-input errors in the declared configuration. Surfaced via status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid port number, port {0} is reserved for SSH")]
    ReservedPort(u16),
}

// ── Relation errors ───────────────────────────────────────────────────────────

/// Relation data that is present but unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationDataError {
    #[error("Malformed database relation data: {0}")]
    Malformed(String),
}

// ── Workload agent errors ─────────────────────────────────────────────────────

/// Failures talking to the workload supervising agent.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("cannot connect to workload agent: {0}")]
    Connection(String),

    #[error("workload agent API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("cannot encode layer: {0}")]
    Encode(String),
}

/// Transient agent failure during an apply. Deferred to the next trigger.
#[derive(Debug, Error)]
#[error("workload agent unavailable: {source}")]
pub struct AgentUnavailable {
    #[from]
    pub source: AgentError,
}

// ── Action errors ─────────────────────────────────────────────────────────────

/// Expected failures of operator actions, reported as structured results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("No database connected")]
    NoDatabaseConnected,

    #[error(transparent)]
    Relation(#[from] RelationDataError),
}

impl ActionError {
    /// Stable machine-readable code used in JSON output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoDatabaseConnected => "no_database_connected",
            Self::Relation(_) => "relation_data",
        }
    }
}
