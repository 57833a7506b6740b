//! Tests for the `Controller` trigger entry points.
//!
//! Walks the operator's lifecycle scenarios: every trigger re-reads its inputs,
//! so changing a mock between calls is enough to simulate a new event.

#![allow(clippy::expect_used)]

use std::io;
use std::sync::{Arc, Mutex};

use fastapi_demo_operator::application::Controller;
use fastapi_demo_operator::application::services::reconcile::PassOutcome;
use fastapi_demo_operator::domain::{SERVICE_NAME, ServiceState, Status};

use crate::mocks::{BrokenConfig, RecordingAgent, StaticConfig, StaticRelation, UnreachableAgent};

#[tokio::test]
async fn test_workload_ready_without_relation_applies_then_reports_blocked() {
    let controller = Controller::new(
        StaticConfig::port(8000),
        StaticRelation::absent(),
        RecordingAgent::new(),
    );

    let outcome = controller.on_workload_ready().await.expect("pass");
    assert!(matches!(outcome, PassOutcome::Applied));
    assert!(controller
        .agent()
        .last_environment()
        .expect("layer sent")
        .is_empty());

    let status = controller.on_status_collect().await.expect("status");
    assert_eq!(
        status,
        Status::Blocked("Waiting for database relation".to_string())
    );
}

#[tokio::test]
async fn test_config_changed_to_custom_port_reaches_command() {
    let controller = Controller::new(
        StaticConfig::port(8080),
        StaticRelation::absent(),
        RecordingAgent::new(),
    );

    controller.on_config_changed().await.expect("pass");

    let layers = controller.agent().layers.borrow();
    let service = layers[0].layer.service(SERVICE_NAME).expect("service");
    assert!(service.command.ends_with("--port=8080"));
}

#[tokio::test]
async fn test_config_changed_to_reserved_port_blocks() {
    let controller = Controller::new(
        StaticConfig::port(22),
        StaticRelation::populated(),
        RecordingAgent::new(),
    );

    let outcome = controller.on_config_changed().await.expect("pass");
    assert_eq!(outcome.name(), "blocked");
    assert_eq!(controller.agent().calls(), 0);

    let status = controller.on_status_collect().await.expect("status");
    assert_eq!(
        status.message(),
        Some("Invalid port number, port 22 is reserved for SSH")
    );
}

// ── Log capture ───────────────────────────────────────────────────────────────

const PORT_REQUESTED: &str = "New application port is requested";

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log lock")).to_string()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log lock").extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Subscriber writing every DEBUG-and-above event into the returned buffer.
fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let logs = LogBuffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    (logs, tracing::subscriber::set_default(subscriber))
}

#[tokio::test]
async fn test_config_changed_logs_requested_port() {
    let (logs, _guard) = capture_logs();
    let controller = Controller::new(
        StaticConfig::port(8080),
        StaticRelation::absent(),
        RecordingAgent::new(),
    );

    controller.on_config_changed().await.expect("pass");

    let out = logs.contents();
    assert!(out.contains(PORT_REQUESTED), "got: {out}");
    assert!(out.contains("port=8080"), "got: {out}");
}

#[tokio::test]
async fn test_config_changed_to_reserved_port_does_not_log_request() {
    let (logs, _guard) = capture_logs();
    let controller = Controller::new(
        StaticConfig::port(22),
        StaticRelation::absent(),
        RecordingAgent::new(),
    );

    controller.on_config_changed().await.expect("pass");

    let out = logs.contents();
    assert!(!out.contains(PORT_REQUESTED), "got: {out}");
    assert!(out.contains("Configuration rejected"), "got: {out}");
}

#[tokio::test]
async fn test_other_triggers_do_not_log_port_request() {
    let (logs, _guard) = capture_logs();
    let controller = Controller::new(
        StaticConfig::port(8080),
        StaticRelation::populated(),
        RecordingAgent::new(),
    );

    controller.on_workload_ready().await.expect("pass");
    controller.on_relation_created().await.expect("pass");
    controller.on_relation_changed().await.expect("pass");

    let out = logs.contents();
    assert!(!out.contains(PORT_REQUESTED), "got: {out}");
    assert!(out.contains("Workload agent ready"), "got: {out}");
}

#[tokio::test]
async fn test_relation_changed_with_data_becomes_active() {
    let controller = Controller::new(
        StaticConfig::port(8000),
        StaticRelation::populated(),
        RecordingAgent::with_state(Some(ServiceState::Running)),
    );

    controller.on_relation_created().await.expect("pass");
    controller.on_relation_changed().await.expect("pass");

    let env = controller.agent().last_environment().expect("layer sent");
    assert_eq!(env["DB_HOST"], "example.com");
    assert_eq!(
        controller.on_status_collect().await.expect("status"),
        Status::Active
    );
}

#[tokio::test]
async fn test_unreachable_agent_defers_and_status_reports_maintenance() {
    let controller = Controller::new(
        StaticConfig::port(8000),
        StaticRelation::populated(),
        UnreachableAgent,
    );

    let outcome = controller.on_workload_ready().await.expect("pass");
    assert!(matches!(outcome, PassOutcome::Deferred(_)));

    let status = controller.on_status_collect().await.expect("status");
    assert_eq!(status.name(), "maintenance");
}

#[tokio::test]
async fn test_unloadable_config_fails_the_trigger() {
    let controller = Controller::new(BrokenConfig, StaticRelation::absent(), RecordingAgent::new());
    assert!(controller.on_config_changed().await.is_err());
    assert_eq!(controller.agent().calls(), 0);
}

#[test]
fn test_get_db_info_action_through_controller() {
    let controller = Controller::new(
        StaticConfig::port(8000),
        StaticRelation::populated(),
        RecordingAgent::new(),
    );
    let results = controller
        .on_action_get_db_info(false)
        .expect("loads")
        .expect("succeeds");
    assert_eq!(results["db-host"], "example.com");
    assert!(!results.contains_key("db-password"));
}
