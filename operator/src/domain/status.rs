//! Unit status and the status aggregator.
//!
//! Every applicable condition is collected, then the one with the highest
//! precedence is reported:
//!
//! ```text
//! Blocked(reserved port) > Blocked(no relation) > Waiting(relation empty)
//!   > Maintenance(agent unreachable) > Maintenance(service down) > Active
//! ```
//!
//! Malformed relation data is reported by [`malformed_relation`] as
//! `Blocked`, still behind a reserved port.

use serde::Serialize;

use crate::domain::config::{Configuration, validate};
use crate::domain::error::RelationDataError;

// ── Messages ──────────────────────────────────────────────────────────────────

pub const WAITING_FOR_RELATION: &str = "Waiting for database relation";
pub const WAITING_FOR_AGENT: &str = "Waiting for Pebble in workload container";
pub const WAITING_FOR_SERVICE: &str = "Waiting for the service to start up";

// ── Types ─────────────────────────────────────────────────────────────────────

/// Externally visible status of the unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Blocked(String),
    Waiting(String),
    Maintenance(String),
    Active,
}

/// Live state of the workload service as seen through the agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    /// The agent did not answer.
    Unreachable,
    Stopped,
    Running,
}

impl Status {
    /// Lower-case status name (`blocked`, `waiting`, `maintenance`, `active`).
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Blocked(_) => "blocked",
            Self::Waiting(_) => "waiting",
            Self::Maintenance(_) => "maintenance",
            Self::Active => "active",
        }
    }

    /// Human-readable reason, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Blocked(m) | Self::Waiting(m) | Self::Maintenance(m) => Some(m),
            Self::Active => None,
        }
    }

    /// 0 is reported first.
    fn precedence(&self) -> u8 {
        match self {
            Self::Blocked(_) => 0,
            Self::Waiting(_) => 1,
            Self::Maintenance(_) => 2,
            Self::Active => 3,
        }
    }
}

#[derive(Serialize)]
struct StatusView<'a> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl Serialize for Status {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        StatusView {
            status: self.name(),
            message: self.message(),
        }
        .serialize(serializer)
    }
}

// ── Aggregator ────────────────────────────────────────────────────────────────

/// Derive the unit status from fresh inputs. Total over every combination.
///
/// `service_state` of `None` means the agent answered but the service is not
/// part of its plan yet.
#[must_use]
pub fn aggregate(
    config: &Configuration,
    relation_established: bool,
    relation_data_ready: bool,
    service_state: Option<ServiceState>,
) -> Status {
    let mut collected = Vec::new();

    if let Err(err) = validate(config) {
        collected.push(Status::Blocked(err.to_string()));
    }

    if !relation_established {
        collected.push(Status::Blocked(WAITING_FOR_RELATION.to_string()));
    } else if !relation_data_ready {
        collected.push(Status::Waiting(WAITING_FOR_RELATION.to_string()));
    }

    match service_state {
        Some(ServiceState::Unreachable) => {
            collected.push(Status::Maintenance(WAITING_FOR_AGENT.to_string()));
        }
        Some(ServiceState::Stopped) | None => {
            collected.push(Status::Maintenance(WAITING_FOR_SERVICE.to_string()));
        }
        Some(ServiceState::Running) => {}
    }

    // `min_by_key` keeps the first of equal keys, so insertion order breaks ties.
    collected
        .into_iter()
        .min_by_key(Status::precedence)
        .unwrap_or(Status::Active)
}

/// Status for a unit whose relation data is present but unusable.
#[must_use]
pub fn malformed_relation(config: &Configuration, err: &RelationDataError) -> Status {
    match validate(config) {
        Err(invalid) => Status::Blocked(invalid.to_string()),
        Ok(()) => Status::Blocked(err.to_string()),
    }
}

// ── Unit tests ────────────────────────────────────────────────────────────────
