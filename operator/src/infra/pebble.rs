//! HTTP client for the workload agent API.
//!
//! Implements the `WorkloadAgent` port over the agent's REST endpoints:
//!   - `POST /v1/layers` to add the service layer
//!   - `POST /v1/services` with `replan`, then `GET /v1/changes/{id}/wait`
//!   - `GET /v1/services?names=` for the live service state

use std::time::Duration;

use anyhow::{Context, Result};
use operator_common::{
    AddLayerRequest, ApiResponse, ChangeInfo, ErrorResult, Layer, ResponseType, ServiceInfo,
    ServicesRequest,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::application::ports::WorkloadAgent;
use crate::domain::{AgentError, ServiceState};

/// Client for a workload agent reachable at `base_url`.
#[derive(Clone)]
pub struct PebbleClient {
    base_url: String,
    http: reqwest::Client,
    change_timeout: Duration,
}

impl PebbleClient {
    /// Build a client with a per-request timeout and a separate bound on how
    /// long a replan change may take to settle.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        request_timeout: Duration,
        change_timeout: Duration,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .context("cannot build HTTP client")?;
        Ok(Self {
            base_url: base_url.into(),
            http,
            change_timeout,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<ApiResponse<T>, AgentError> {
        let response = request
            .send()
            .await
            .map_err(|e| AgentError::Connection(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| AgentError::Connection(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ApiResponse<ErrorResult>>(&body)
                .ok()
                .and_then(|resp| resp.result)
                .map_or_else(|| String::from_utf8_lossy(&body).to_string(), |r| r.message);
            return Err(AgentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice(&body).map_err(|e| AgentError::Api {
            status: status.as_u16(),
            message: format!("invalid response body: {e}"),
        })
    }

    async fn wait_change(&self, id: &str) -> Result<ChangeInfo, AgentError> {
        let secs = self.change_timeout.as_secs();
        let request = self
            .http
            .get(self.url(&format!("/v1/changes/{id}/wait?timeout={secs}s")))
            // The wait itself may take up to the change timeout.
            .timeout(self.change_timeout + Duration::from_secs(5));
        let response: ApiResponse<ChangeInfo> = self.send(request).await?;
        response.result.ok_or_else(|| AgentError::Api {
            status: response.status_code,
            message: format!("change {id} returned no result"),
        })
    }
}

impl WorkloadAgent for PebbleClient {
    async fn add_layer(&self, label: &str, layer: &Layer, combine: bool) -> Result<(), AgentError> {
        let rendered = serde_yaml::to_string(layer).map_err(|e| AgentError::Encode(e.to_string()))?;
        let body = AddLayerRequest {
            action: "add".to_string(),
            combine,
            label: label.to_string(),
            format: "yaml".to_string(),
            layer: rendered,
        };
        let request = self.http.post(self.url("/v1/layers")).json(&body);
        let _: ApiResponse<serde_json::Value> = self.send(request).await?;
        Ok(())
    }

    async fn replan(&self) -> Result<(), AgentError> {
        let body = ServicesRequest {
            action: "replan".to_string(),
            services: Vec::new(),
        };
        let request = self.http.post(self.url("/v1/services")).json(&body);
        let response: ApiResponse<serde_json::Value> = self.send(request).await?;

        let change_id = match (response.kind, response.change) {
            (ResponseType::Async, Some(id)) => id,
            // Nothing to do: the plan already matches.
            _ => return Ok(()),
        };
        debug!(change = %change_id, "Waiting for replan change");

        let change = self.wait_change(&change_id).await?;
        match change.err {
            Some(err) => Err(AgentError::Api {
                status: response.status_code,
                message: format!("change {} failed: {err}", change.id),
            }),
            None => Ok(()),
        }
    }

    async fn service_state(&self, name: &str) -> Result<Option<ServiceState>, AgentError> {
        let request = self.http.get(self.url(&format!("/v1/services?names={name}")));
        let response: ApiResponse<Vec<ServiceInfo>> = self.send(request).await?;
        let state = response
            .result
            .unwrap_or_default()
            .into_iter()
            .find(|info| info.name == name)
            .map(|info| {
                if info.is_running() {
                    ServiceState::Running
                } else {
                    ServiceState::Stopped
                }
            });
        Ok(state)
    }
}
