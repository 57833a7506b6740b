//! Human-readable terminal renderer.

use owo_colors::OwoColorize as _;

use crate::application::services::reconcile::PassOutcome;
use crate::domain::{ActionError, ActionResults, Status};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the unit status.
    pub fn render_status(&self, status: &Status) {
        if self.ctx.quiet {
            return;
        }
        let style = match status {
            Status::Active => self.ctx.styles.success,
            Status::Blocked(_) => self.ctx.styles.error,
            Status::Waiting(_) => self.ctx.styles.warning,
            Status::Maintenance(_) => self.ctx.styles.info,
        };
        let name = status.name();
        match status.message() {
            Some(message) => self
                .ctx
                .kv("Unit status:", &format!("{} ({message})", name.style(style))),
            None => self.ctx.kv("Unit status:", &format!("{}", name.style(style))),
        }
    }

    /// Render the outcome of a reconciliation pass.
    pub fn render_pass(&self, hook: &str, outcome: &PassOutcome) {
        match outcome {
            PassOutcome::Applied => self.ctx.success(&format!("{hook}: layer applied")),
            PassOutcome::Blocked(err) => self.ctx.warn(&format!("{hook}: blocked: {err}")),
            PassOutcome::Deferred(err) => self.ctx.warn(&format!("{hook}: deferred: {err}")),
        }
    }

    /// Render a successful action's results, one key per line.
    pub fn render_action_results(&self, results: &ActionResults) {
        for (key, value) in results {
            self.ctx.kv(&format!("{key}:"), value);
        }
    }

    /// Render an action failure. Never suppressed.
    pub fn render_action_failure(&self, action: &str, err: &ActionError) {
        self.ctx.error(&format!("{action} failed: {err}"));
    }
}
