//! Output formatting module

pub mod human;
pub mod json;
pub mod styles;

use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;

pub use human::HumanRenderer;
pub use styles::Styles;

use crate::application::services::reconcile::PassOutcome;
use crate::domain::{ActionError, ActionResults, Status};

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and terminal state.
    ///
    /// `NO_COLOR` reaches this through the `--no-color` flag.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let use_colors = !no_color && Term::stdout().is_term();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            quiet,
        }
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }
}

/// Renders JSON objects to stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    fn print(value: &serde_json::Value) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// Output renderer for the active mode.
pub enum Renderer<'a> {
    /// Human-readable terminal output.
    Human(HumanRenderer<'a>),
    /// Machine-readable JSON on stdout.
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// Render the unit status.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_status(&self, status: &Status) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_status(status);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&json::status_value(status)?),
        }
    }

    /// Render the outcome of a reconciliation pass.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_pass(&self, hook: &str, outcome: &PassOutcome) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_pass(hook, outcome);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::print(&json::pass_value(hook, outcome)),
        }
    }

    /// Render an action's outcome.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_action(
        &self,
        action: &str,
        outcome: &std::result::Result<ActionResults, ActionError>,
    ) -> Result<()> {
        match (self, outcome) {
            (Self::Human(r), Ok(results)) => {
                r.render_action_results(results);
                Ok(())
            }
            (Self::Human(r), Err(err)) => {
                r.render_action_failure(action, err);
                Ok(())
            }
            (Self::Json(_), Ok(results)) => {
                JsonRenderer::print(&json::action_success_value(action, results))
            }
            (Self::Json(_), Err(err)) => {
                JsonRenderer::print(&json::action_failure_value(action, err))
            }
        }
    }
}
