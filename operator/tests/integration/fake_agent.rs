//! In-process fake of the workload agent's HTTP API.
//!
//! Serves the endpoints `PebbleClient` talks to and records what it receives.
//! A successful replan marks every service of the last added layer active.

#![allow(clippy::expect_used, dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use operator_common::{AddLayerRequest, Layer, ServicesRequest};
use serde_json::{Value, json};

/// How the fake reacts to requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Behaviour {
    /// Answer `POST /v1/layers` with a 400 error.
    pub reject_layers: bool,
    /// Report the replan change as failed.
    pub fail_change: bool,
    /// Answer replan with a sync response and no change to wait on.
    pub sync_replan: bool,
}

#[derive(Default)]
pub struct AgentState {
    pub behaviour: Behaviour,
    pub layers: Vec<AddLayerRequest>,
    pub replans: Vec<ServicesRequest>,
    pub wait_timeouts: Vec<String>,
    /// `(name, current)` pairs reported by `GET /v1/services`.
    pub services: Vec<(String, String)>,
}

pub type Shared = Arc<Mutex<AgentState>>;

pub struct FakeAgent {
    pub base_url: String,
    pub state: Shared,
}

impl FakeAgent {
    /// Bind to an ephemeral port and serve in the background.
    pub async fn start(behaviour: Behaviour) -> Self {
        let state: Shared = Arc::new(Mutex::new(AgentState {
            behaviour,
            ..AgentState::default()
        }));
        let app = Router::new()
            .route("/v1/layers", post(add_layer))
            .route("/v1/services", post(replan).get(list_services))
            .route("/v1/changes/{id}/wait", get(wait_change))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    /// Pretend a service is already known to the agent.
    pub fn set_service(&self, name: &str, current: &str) {
        let mut state = self.state.lock().expect("lock");
        state.services.retain(|(n, _)| n != name);
        state.services.push((name.to_string(), current.to_string()));
    }

    pub fn layers(&self) -> Vec<AddLayerRequest> {
        self.state.lock().expect("lock").layers.clone()
    }

    pub fn replan_count(&self) -> usize {
        self.state.lock().expect("lock").replans.len()
    }

    pub fn wait_timeouts(&self) -> Vec<String> {
        self.state.lock().expect("lock").wait_timeouts.clone()
    }

    /// The last layer document received, parsed back from YAML.
    pub fn last_layer(&self) -> Option<Layer> {
        self.layers()
            .last()
            .map(|req| serde_yaml::from_str(&req.layer).expect("agent received valid YAML"))
    }
}

fn sync_ok(result: Value) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({"type": "sync", "status-code": 200, "status": "OK", "result": result})),
    )
}

fn error(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (
        status,
        Json(json!({
            "type": "error",
            "status-code": status.as_u16(),
            "status": status.canonical_reason().unwrap_or_default(),
            "result": {"message": message},
        })),
    )
}

async fn add_layer(
    State(state): State<Shared>,
    Json(req): Json<AddLayerRequest>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().expect("lock");
    if state.behaviour.reject_layers {
        return error(StatusCode::BAD_REQUEST, "cannot parse layer");
    }
    if req.format != "yaml" || serde_yaml::from_str::<Layer>(&req.layer).is_err() {
        return error(StatusCode::BAD_REQUEST, "invalid layer document");
    }
    state.layers.push(req);
    sync_ok(json!(true))
}

async fn replan(
    State(state): State<Shared>,
    Json(req): Json<ServicesRequest>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().expect("lock");
    if req.action != "replan" {
        return error(StatusCode::BAD_REQUEST, "unsupported action");
    }
    state.replans.push(req);
    if state.behaviour.sync_replan {
        return sync_ok(Value::Null);
    }
    (
        StatusCode::ACCEPTED,
        Json(json!({
            "type": "async",
            "status-code": 202,
            "status": "Accepted",
            "change": "1",
            "result": null,
        })),
    )
}

async fn wait_change(
    State(state): State<Shared>,
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().expect("lock");
    if let Some(timeout) = params.get("timeout") {
        state.wait_timeouts.push(timeout.clone());
    }
    if state.behaviour.fail_change {
        return sync_ok(json!({
            "id": id,
            "kind": "replan",
            "summary": "Replan",
            "status": "Error",
            "ready": true,
            "err": "cannot perform the following tasks:\n- Start service \"fastapi-service\"",
        }));
    }

    let started: Vec<String> = state
        .layers
        .last()
        .and_then(|req| serde_yaml::from_str::<Layer>(&req.layer).ok())
        .map(|layer| layer.services.into_keys().collect())
        .unwrap_or_default();
    for name in started {
        state.services.retain(|(n, _)| *n != name);
        state.services.push((name, "active".to_string()));
    }

    sync_ok(json!({
        "id": id,
        "kind": "replan",
        "summary": "Replan",
        "status": "Done",
        "ready": true,
        "err": null,
    }))
}

async fn list_services(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let state = state.lock().expect("lock");
    let wanted: Vec<&str> = params
        .get("names")
        .map(|names| names.split(',').collect())
        .unwrap_or_default();
    let services: Vec<Value> = state
        .services
        .iter()
        .filter(|(name, _)| wanted.is_empty() || wanted.contains(&name.as_str()))
        .map(|(name, current)| json!({"name": name, "startup": "enabled", "current": current}))
        .collect();
    sync_ok(Value::Array(services))
}
