use serde::Deserialize;
use std::path::PathBuf;

/// Prefix of every environment variable read into [`OperatorSettings`].
pub const ENV_PREFIX: &str = "DEMO_OPERATOR_";

/// Runtime settings of the operator process.
///
/// Each field maps to `DEMO_OPERATOR_<FIELD>`:
///   - `DEMO_OPERATOR_PEBBLE_URL`           (default `http://localhost:4000`)
///   - `DEMO_OPERATOR_CONFIG_PATH`          (default `config.yaml`)
///   - `DEMO_OPERATOR_RELATION_PATH`        (default `relation.json`)
///   - `DEMO_OPERATOR_REQUEST_TIMEOUT_SECS` (default `30`)
///   - `DEMO_OPERATOR_CHANGE_TIMEOUT_SECS`  (default `30`)
#[derive(Debug, Clone, Deserialize)]
pub struct OperatorSettings {
    /// Base URL of the workload agent API.
    #[serde(default = "default_pebble_url")]
    pub pebble_url: String,

    /// YAML file holding the declared configuration.
    #[serde(default = "default_config_path")]
    pub config_path: PathBuf,

    /// JSON file holding the database relation data.
    #[serde(default = "default_relation_path")]
    pub relation_path: PathBuf,

    /// Per-request timeout for agent API calls.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How long to wait for a replan change to settle.
    #[serde(default = "default_timeout_secs")]
    pub change_timeout_secs: u64,
}

fn default_pebble_url() -> String {
    "http://localhost:4000".to_string()
}

fn default_config_path() -> PathBuf {
    PathBuf::from("config.yaml")
}

fn default_relation_path() -> PathBuf {
    PathBuf::from("relation.json")
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for OperatorSettings {
    fn default() -> Self {
        Self {
            pebble_url: default_pebble_url(),
            config_path: default_config_path(),
            relation_path: default_relation_path(),
            request_timeout_secs: default_timeout_secs(),
            change_timeout_secs: default_timeout_secs(),
        }
    }
}
