//! Application service — unit status collection use-case.
//!
//! Re-derives every input from its source on each call. Never trusts the
//! outcome of an earlier reconciliation pass.

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::application::ports::{ConfigSource, RelationSource, WorkloadAgent};
use crate::domain::{SERVICE_NAME, ServiceState, Status, aggregate, malformed_relation, resolve};

/// Collect the unit status from fresh inputs.
///
/// # Errors
///
/// Returns an error if the configuration or relation data cannot be loaded.
/// Malformed relation data and agent failures are folded into the status.
pub async fn collect_status(
    config: &impl ConfigSource,
    relation: &impl RelationSource,
    agent: &impl WorkloadAgent,
) -> Result<Status> {
    let config = config.load().context("cannot load configuration")?;
    let records = relation
        .load()
        .context("cannot load database relation data")?;

    let relation_established = records.is_some();
    let relation_data_ready = match records.as_deref().map(resolve) {
        Some(Ok(credential)) => credential.is_some(),
        Some(Err(err)) => {
            warn!(error = %err, "Database relation data is malformed");
            return Ok(malformed_relation(&config, &err));
        }
        None => false,
    };
    let service_state = query_service_state(agent).await;

    Ok(aggregate(
        &config,
        relation_established,
        relation_data_ready,
        service_state,
    ))
}

/// Ask the agent for the workload service, mapping failures to `Unreachable`.
async fn query_service_state(agent: &impl WorkloadAgent) -> Option<ServiceState> {
    match agent.service_state(SERVICE_NAME).await {
        Ok(state) => state,
        Err(err) => {
            debug!(error = %err, service = SERVICE_NAME, "Service state query failed");
            Some(ServiceState::Unreachable)
        }
    }
}
