//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and `operator_common` — never
//! from `crate::infra`, `crate::commands`, or `crate::output`.

use anyhow::Result;
use operator_common::Layer;

use crate::domain::{AgentError, Configuration, RawRelationRecord, ServiceState};

// ── Input Ports ───────────────────────────────────────────────────────────────

/// Source of the declared configuration.
pub trait ConfigSource {
    /// Load a fresh configuration snapshot.
    fn load(&self) -> Result<Configuration>;
}

/// Source of the database relation data.
pub trait RelationSource {
    /// Load the raw databags of the relation.
    ///
    /// Returns `None` when the relation is not established. An established
    /// relation with no data yet yields `Some` of empty databags.
    fn load(&self) -> Result<Option<Vec<RawRelationRecord>>>;
}

// ── Workload Agent Port ───────────────────────────────────────────────────────

/// The supervising agent that runs the workload process.
#[allow(async_fn_in_trait)]
pub trait WorkloadAgent {
    /// Add a layer to the agent's plan under `label`.
    ///
    /// With `combine`, a layer with the same label is merged into rather than
    /// rejected.
    async fn add_layer(&self, label: &str, layer: &Layer, combine: bool)
    -> Result<(), AgentError>;

    /// Ask the agent to bring running services in line with its plan.
    async fn replan(&self) -> Result<(), AgentError>;

    /// Query the live state of a service.
    ///
    /// Returns `Ok(None)` when the agent does not know the service.
    async fn service_state(&self, name: &str) -> Result<Option<ServiceState>, AgentError>;
}
