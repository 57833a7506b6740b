//! Application service — converge the workload onto the desired layer.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.
//!
//! One pass runs `Validating → (Blocked | Building) → Applying →
//! (Applied | Deferred)` and keeps nothing across passes.

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::application::ports::{RelationSource, WorkloadAgent};
use crate::domain::{
    AgentError, AgentUnavailable, Configuration, DesiredLayer, LAYER_LABEL, ValidationError, build, resolve,
    validate,
};

/// Marker for a layer the agent accepted and replanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied;

/// How a reconciliation pass ended.
#[derive(Debug)]
pub enum PassOutcome {
    /// The layer was added and the agent replanned.
    Applied,
    /// The configuration is invalid; nothing was sent to the agent.
    Blocked(ValidationError),
    /// The agent could not be reached; the next trigger retries.
    Deferred(AgentUnavailable),
}

impl PassOutcome {
    /// Lower-case outcome name used in rendered output.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Blocked(_) => "blocked",
            Self::Deferred(_) => "deferred",
        }
    }

    /// Reason for a non-applied outcome.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Applied => None,
            Self::Blocked(err) => Some(err.to_string()),
            Self::Deferred(err) => Some(err.to_string()),
        }
    }
}

/// Submit the desired layer and ask the agent to replan.
///
/// Starting, restarting or leaving the service running is decided by the
/// agent from whether the definition changed.
///
/// # Errors
///
/// Returns [`AgentUnavailable`] on any agent API or connection failure.
pub async fn reconcile(
    agent: &impl WorkloadAgent,
    desired: &DesiredLayer,
) -> Result<Applied, AgentUnavailable> {
    debug!(label = LAYER_LABEL, "Assembling Pebble layers");
    agent.add_layer(LAYER_LABEL, &desired.to_layer(), true).await?;
    info!(label = LAYER_LABEL, "Added updated layer to Pebble plan");

    agent.replan().await?;
    info!(service = desired.service_name, "Replanned with service");

    Ok(Applied)
}

/// Run one reconciliation pass from a fresh configuration snapshot.
///
/// # Errors
///
/// Returns an error if the relation data cannot be loaded or is malformed
/// (the chain then holds a [`crate::domain::RelationDataError`]), or if the
/// layer cannot be encoded ([`AgentError::Encode`]). Other agent failures
/// are not errors; they yield [`PassOutcome::Deferred`].
pub async fn run_pass(
    config: &Configuration,
    relation: &impl RelationSource,
    agent: &impl WorkloadAgent,
) -> Result<PassOutcome> {
    if let Err(err) = validate(config) {
        warn!(port = config.server_port, error = %err, "Configuration rejected, layer not applied");
        return Ok(PassOutcome::Blocked(err));
    }

    let records = relation
        .load()
        .context("cannot load database relation data")?
        .unwrap_or_default();
    let credential = resolve(&records)?;
    debug!(
        connected = credential.is_some(),
        "Resolved database relation"
    );

    // The configuration was validated above.
    let (desired, _) = build(config, credential.as_ref());

    match reconcile(agent, &desired).await {
        Ok(Applied) => Ok(PassOutcome::Applied),
        Err(AgentUnavailable {
            source: err @ AgentError::Encode(_),
        }) => Err(err.into()),
        Err(unavailable) => {
            warn!(error = %unavailable, "Waiting for Pebble in workload container");
            Ok(PassOutcome::Deferred(unavailable))
        }
    }
}
