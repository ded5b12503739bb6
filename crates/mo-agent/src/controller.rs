//! The readiness-driven aggregation loop.
//!
//! On every external signal the controller re-runs one complete, synchronous
//! cycle: refresh fragments from the collaborators, evaluate readiness, and
//! either deploy (on `Ready`) or report the single blocking reason. The cycle
//! is re-entrant and idempotent; a later signal simply re-runs it with
//! fresher data.

use tracing::{debug, error, warn};

use mo_config::{BuilderState, Endpoint, WorkloadBuilder};
use mo_render::{IngressConfig, Layer};

use crate::probe;
use crate::relations::{
    ConfigSource, ContainerRuntime, DatabaseRelation, IngressPublisher, IngressRelation,
};
use crate::signal::Signal;
use crate::status::UnitStatus;

/// Owns one workload builder and drives it from external signals.
pub struct Controller {
    /// Pristine copy of the builder as constructed at startup; used to reset
    /// aggregation when the database relation is torn down, so stale "set"
    /// fields never survive a teardown.
    template: WorkloadBuilder,
    builder: WorkloadBuilder,

    config: Box<dyn ConfigSource>,
    database: Box<dyn DatabaseRelation>,
    ingress: Box<dyn IngressRelation>,
    container: Box<dyn ContainerRuntime>,
    publisher: Box<dyn IngressPublisher>,

    status: UnitStatus,
}

impl Controller {
    pub fn new(
        builder: WorkloadBuilder,
        config: Box<dyn ConfigSource>,
        database: Box<dyn DatabaseRelation>,
        ingress: Box<dyn IngressRelation>,
        container: Box<dyn ContainerRuntime>,
        publisher: Box<dyn IngressPublisher>,
    ) -> Self {
        Controller {
            template: builder.clone(),
            builder,
            config,
            database,
            ingress,
            container,
            publisher,
            status: UnitStatus::Waiting("checking preconditions".to_string()),
        }
    }

    /// Current operator-facing status.
    pub fn status(&self) -> &UnitStatus {
        &self.status
    }

    /// Handle one external signal, running a full aggregation cycle.
    pub fn handle(&mut self, signal: Signal) -> &UnitStatus {
        debug!(signal = %signal, "handling signal");

        match signal {
            Signal::DatabaseBroken => self.on_database_broken(),
            _ => self.cycle(),
        }

        &self.status
    }

    /// A broken relation gets a fresh builder rather than in-place mutation;
    /// the store is already known incomplete, so no cycle is attempted.
    fn on_database_broken(&mut self) {
        self.builder = self.template.clone();
        self.status = UnitStatus::Waiting("database relation broken".to_string());
    }

    fn cycle(&mut self) {
        self.refresh_config();
        self.refresh_database();
        self.builder.set_ingress_ready(self.ingress.is_ready());

        match self.builder.state() {
            BuilderState::Ready => self.deploy(),
            state => {
                debug!(state = %state, "preconditions unsatisfied");
                self.status = UnitStatus::Waiting(state.to_string());
            }
        }
    }

    fn refresh_config(&mut self) {
        let env = self.config.get("env").unwrap_or_default();
        let log_level = self.config.get("log_level").unwrap_or_default();
        self.builder.set_env(&env).set_log_level(&log_level);
    }

    fn refresh_database(&mut self) {
        for unit in self.database.fetch() {
            match unit.endpoints.parse::<Endpoint>() {
                Ok(endpoint) => {
                    self.builder
                        .set_database_endpoint(&endpoint, unit.username, unit.password);
                }
                Err(err) => {
                    // Unparseable relation data reads as "not yet supplied".
                    warn!(endpoints = %unit.endpoints, error = %err, "skipping database unit");
                }
            }
        }
    }

    fn deploy(&mut self) {
        if !self.container.can_connect() {
            self.status = UnitStatus::Blocked("could not connect to container".to_string());
            return;
        }

        // Unreachable from a Ready builder; kept loud rather than defaulted.
        let workload = match self.builder.build() {
            Ok(workload) => workload,
            Err(err) => {
                error!(error = %err, "build failed on a ready builder");
                self.status = UnitStatus::Blocked(format!("invalid configuration: {}", err));
                return;
            }
        };

        let layer = Layer::for_workload(&workload);
        if let Err(err) = self.container.apply_layer(&workload.name, &layer) {
            error!(error = %err, "layer replan failed");
            self.status = UnitStatus::Blocked("failed to configure container".to_string());
            return;
        }

        if let Err(err) = self.container.open_port(workload.port) {
            error!(error = %err, "failed to open workload port");
            self.status = UnitStatus::Blocked("failed to open port".to_string());
            return;
        }

        let route = IngressConfig::for_workload(&workload);
        if let Err(err) = self.publisher.publish(&route) {
            error!(error = %err, "ingress publish failed");
            self.status = UnitStatus::Blocked("failed to publish ingress route".to_string());
            return;
        }

        self.status = UnitStatus::Active("🚀".to_string());
    }

    /// Version reported by the running workload.
    ///
    /// `"unavailable"` when the container cannot be reached at all,
    /// `"unknown"` when nothing has been deployed yet or the probe fails.
    /// Never an error.
    pub fn workload_version(&self) -> String {
        if !self.container.can_connect() {
            return "unavailable".to_string();
        }

        // Before a successful build nothing has been deployed, so there is
        // no service to ask.
        match self.builder.build() {
            Ok(workload) => probe::fetch_version(&workload.api_url("about"), probe::PROBE_TIMEOUT),
            Err(_) => "unknown".to_string(),
        }
    }
}
