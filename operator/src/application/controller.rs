//! Trigger entry points.
//!
//! `Controller` holds explicitly injected sources and the agent client, and
//! exposes one method per lifecycle trigger. Each call runs to completion and
//! re-reads its inputs; nothing is cached between calls.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::application::ports::{ConfigSource, RelationSource, WorkloadAgent};
use crate::application::services::reconcile::PassOutcome;
use crate::application::services::{db_info, reconcile, unit_status};
use crate::domain::{ActionError, ActionResults, Configuration, Status, validate};

/// Reconciliation controller for the workload.
pub struct Controller<C, R, A> {
    config: C,
    relation: R,
    agent: A,
}

impl<C, R, A> Controller<C, R, A>
where
    C: ConfigSource,
    R: RelationSource,
    A: WorkloadAgent,
{
    #[must_use]
    pub fn new(config: C, relation: R, agent: A) -> Self {
        Self {
            config,
            relation,
            agent,
        }
    }

    /// The injected agent client.
    #[must_use]
    pub fn agent(&self) -> &A {
        &self.agent
    }

    /// The workload container's agent became ready.
    ///
    /// # Errors
    ///
    /// See [`reconcile::run_pass`].
    pub async fn on_workload_ready(&self) -> Result<PassOutcome> {
        info!("Workload agent ready");
        self.reconcile_pass().await
    }

    /// The declared configuration changed.
    ///
    /// # Errors
    ///
    /// See [`reconcile::run_pass`].
    pub async fn on_config_changed(&self) -> Result<PassOutcome> {
        let config = self.load_config()?;
        if validate(&config).is_ok() {
            debug!(port = config.server_port, "New application port is requested");
        }
        reconcile::run_pass(&config, &self.relation, &self.agent).await
    }

    /// The database relation was created.
    ///
    /// # Errors
    ///
    /// See [`reconcile::run_pass`].
    pub async fn on_relation_created(&self) -> Result<PassOutcome> {
        info!("Database relation created");
        self.reconcile_pass().await
    }

    /// The database relation data changed.
    ///
    /// # Errors
    ///
    /// See [`reconcile::run_pass`].
    pub async fn on_relation_changed(&self) -> Result<PassOutcome> {
        info!("Database relation changed");
        self.reconcile_pass().await
    }

    /// Derive the unit status.
    ///
    /// # Errors
    ///
    /// See [`unit_status::collect_status`].
    pub async fn on_status_collect(&self) -> Result<Status> {
        unit_status::collect_status(&self.config, &self.relation, &self.agent).await
    }

    /// Run the `get-db-info` action.
    ///
    /// # Errors
    ///
    /// See [`db_info::get_db_info`].
    pub fn on_action_get_db_info(
        &self,
        show_password: bool,
    ) -> Result<std::result::Result<ActionResults, ActionError>> {
        db_info::get_db_info(&self.relation, show_password)
    }

    fn load_config(&self) -> Result<Configuration> {
        self.config.load().context("cannot load configuration")
    }

    async fn reconcile_pass(&self) -> Result<PassOutcome> {
        let config = self.load_config()?;
        reconcile::run_pass(&config, &self.relation, &self.agent).await
    }
}
