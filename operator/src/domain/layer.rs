//! Desired process layer for the workload.
//!
//! `build` is a pure function of the configuration and the resolved
//! credential. The layer is rebuilt on every pass and never diffed here;
//! the agent treats re-applying identical content as a no-op.

use std::collections::BTreeMap;

use operator_common::{Layer, Override, Service, Startup};

use crate::domain::config::{Configuration, validate};
use crate::domain::error::ValidationError;
use crate::domain::relation::RelationCredential;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Name of the workload service in the agent's plan.
pub const SERVICE_NAME: &str = "fastapi-service";

/// Label under which the layer is added to the agent's plan.
pub const LAYER_LABEL: &str = "fastapi_demo";

const LAYER_SUMMARY: &str = "FastAPI demo service";
const LAYER_DESCRIPTION: &str = "pebble config layer for FastAPI demo server";
const SERVICE_SUMMARY: &str = "fastapi demo";

const ENTRYPOINT: &[&str] = &["uvicorn", "api_demo_server.app:app", "--host=0.0.0.0"];

pub const ENV_DB_HOST: &str = "DB_HOST";
pub const ENV_DB_PORT: &str = "DB_PORT";
pub const ENV_DB_USER: &str = "DB_USER";
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";

// ── Types ─────────────────────────────────────────────────────────────────────

/// The process definition the workload should be running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesiredLayer {
    pub service_name: &'static str,
    pub command: String,
    /// Empty whenever no credential is resolved.
    pub environment: BTreeMap<String, String>,
    pub startup: Startup,
}

impl DesiredLayer {
    /// Render as the layer document submitted to the agent.
    #[must_use]
    pub fn to_layer(&self) -> Layer {
        let mut services = BTreeMap::new();
        services.insert(
            self.service_name.to_string(),
            Service {
                r#override: Override::Replace,
                summary: Some(SERVICE_SUMMARY.to_string()),
                command: self.command.clone(),
                startup: self.startup,
                environment: self.environment.clone(),
            },
        );
        Layer {
            summary: Some(LAYER_SUMMARY.to_string()),
            description: Some(LAYER_DESCRIPTION.to_string()),
            services,
        }
    }
}

// ── Pure functions ────────────────────────────────────────────────────────────

/// Command line of the workload for the given port.
#[must_use]
pub fn workload_command(server_port: u16) -> String {
    let port_arg = format!("--port={server_port}");
    ENTRYPOINT
        .iter()
        .copied()
        .chain(std::iter::once(port_arg.as_str()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Environment of the workload: the four `DB_*` keys, or nothing.
#[must_use]
pub fn workload_environment(credential: Option<&RelationCredential>) -> BTreeMap<String, String> {
    let Some(cred) = credential else {
        return BTreeMap::new();
    };
    [
        (ENV_DB_HOST, &cred.host),
        (ENV_DB_PORT, &cred.port),
        (ENV_DB_USER, &cred.username),
        (ENV_DB_PASSWORD, &cred.password),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.clone()))
    .collect()
}

/// Build the desired layer and the configuration verdict.
///
/// The layer is always returned, even when the configuration is invalid, so
/// callers can inspect it; callers must not apply it when a validation error
/// is present.
#[must_use]
pub fn build(
    config: &Configuration,
    credential: Option<&RelationCredential>,
) -> (DesiredLayer, Option<ValidationError>) {
    let layer = DesiredLayer {
        service_name: SERVICE_NAME,
        command: workload_command(config.server_port),
        environment: workload_environment(credential),
        startup: Startup::Enabled,
    };
    (layer, validate(config).err())
}

// ── Unit tests ────────────────────────────────────────────────────────────────
