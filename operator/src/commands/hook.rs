//! `hook` command — run one reconciliation pass for a lifecycle event.

use anyhow::Result;
use clap::{Args, ValueEnum};
use tracing::info;

use crate::app::AppContext;

/// Lifecycle events that trigger a reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HookEvent {
    /// The workload container's agent is ready
    PebbleReady,
    /// The declared configuration changed
    ConfigChanged,
    /// The database relation was created
    RelationCreated,
    /// The database relation data changed
    RelationChanged,
}

impl HookEvent {
    /// Event name as accepted on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::PebbleReady => "pebble-ready",
            Self::ConfigChanged => "config-changed",
            Self::RelationCreated => "relation-created",
            Self::RelationChanged => "relation-changed",
        }
    }
}

/// Arguments for the hook command.
#[derive(Args)]
pub struct HookArgs {
    /// Event to handle
    #[arg(value_enum)]
    pub event: HookEvent,
}

/// Dispatch the event to its controller entry point and render the outcome.
///
/// # Errors
///
/// Returns an error if inputs cannot be loaded or relation data is malformed.
pub async fn run(app: &AppContext, args: &HookArgs) -> Result<()> {
    let event = args.event;
    info!(hook = event.name(), "Handling hook");
    let controller = &app.controller;
    let outcome = match event {
        HookEvent::PebbleReady => controller.on_workload_ready().await?,
        HookEvent::ConfigChanged => controller.on_config_changed().await?,
        HookEvent::RelationCreated => controller.on_relation_created().await?,
        HookEvent::RelationChanged => controller.on_relation_changed().await?,
    };
    app.renderer().render_pass(event.name(), &outcome)
}
