//! Application context — unified state passed to every command handler.
//!
//! Built once in `Cli::run()` from the process settings, wiring the file
//! sources and the agent client into a single `Controller`.

use std::time::Duration;

use anyhow::Result;
use operator_common::OperatorSettings;

use crate::application::Controller;
use crate::infra::{JsonRelationSource, PebbleClient, YamlConfigSource};
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Controller wired to the production adapters.
pub type ProductionController = Controller<YamlConfigSource, JsonRelationSource, PebbleClient>;

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Trigger entry points over the configured sources and agent.
    pub controller: ProductionController,
}

impl AppContext {
    /// Construct an `AppContext` from CLI flags and process settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the agent HTTP client cannot be built.
    pub fn new(flags: &OutputFlags, settings: &OperatorSettings) -> Result<Self> {
        let mode = if flags.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        let agent = PebbleClient::new(
            settings.pebble_url.clone(),
            Duration::from_secs(settings.request_timeout_secs),
            Duration::from_secs(settings.change_timeout_secs),
        )?;
        let controller = Controller::new(
            YamlConfigSource::new(settings.config_path.clone()),
            JsonRelationSource::new(settings.relation_path.clone()),
            agent,
        );

        Ok(Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            mode,
            controller,
        })
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }
}
