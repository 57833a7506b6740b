use serde::{Deserialize, Serialize};

/// Envelope kind of every agent API response
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Sync,
    Async,
    Error,
}

/// Response envelope returned by the agent API.
///
/// `change` is only set on async responses and names the change to wait on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(rename = "type")]
    pub kind: ResponseType,
    #[serde(rename = "status-code")]
    pub status_code: u16,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<String>,
    pub result: Option<T>,
}

/// Body of an error-typed response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResult {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Live state of a service as reported by the agent
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCurrent {
    Active,
    Inactive,
    Backoff,
    Error,
    #[serde(other)]
    Unknown,
}

/// One entry of `GET /v1/services`. Other fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub name: String,
    pub current: ServiceCurrent,
}

impl ServiceInfo {
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.current == ServiceCurrent::Active
    }
}

/// A change as returned by `GET /v1/changes/{id}/wait`.
///
/// `err` is set when any task of the change failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeInfo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
}

/// Body of `POST /v1/layers`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddLayerRequest {
    pub action: String,
    pub combine: bool,
    pub label: String,
    pub format: String,
    /// The layer document, already rendered as YAML.
    pub layer: String,
}

/// Body of `POST /v1/services`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesRequest {
    pub action: String,
    #[serde(default)]
    pub services: Vec<String>,
}
