//! Field-wise aggregation of workload configuration.
//!
//! Configuration fragments arrive independently: static defaults at
//! construction, operator config values, database credentials from a
//! relation, and an ingress readiness signal. [`WorkloadBuilder`] accumulates
//! them one event at a time; [`WorkloadBuilder::state`] says whether the
//! accumulated state is sufficient, and [`WorkloadBuilder::build`] freezes it
//! into a [`Workload`].
//!
//! Values that are known up front are plain fields; values that come from an
//! event or relation are `Option`. Once a field is set it is never reverted
//! here — a broken relation is handled by the controller constructing a
//! fresh builder.

use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;
use crate::env::{WorkloadEnv, WorkloadLogLevel};
use crate::error::{ConfigError, Result};
use crate::workload::Workload;

/// The single highest-precedence reason the aggregated configuration is not
/// deployable, or `Ready`.
///
/// Evaluation order is a behavioral contract: database first, then
/// environment, then ingress. Callers report exactly one blocking reason per
/// evaluation, never a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuilderState {
    DatabaseNotReady,
    EnvNotSet,
    IngressNotReady,
    Ready,
}

impl std::fmt::Display for BuilderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuilderState::DatabaseNotReady => write!(f, "database relation not ready"),
            BuilderState::EnvNotSet => write!(f, "env config value not set"),
            BuilderState::IngressNotReady => write!(f, "ingress not ready"),
            BuilderState::Ready => write!(f, "all config values set"),
        }
    }
}

/// Mutable, partially-populated workload configuration.
#[derive(Debug, Clone)]
pub struct WorkloadBuilder {
    // Identity, fixed at construction.
    name: String,
    model: String,
    port: u16,
    command: String,
    db_name: String,
    db_relation_name: String,
    ingress_relation_name: String,

    // Fragments, filled in by events.
    env: Option<WorkloadEnv>,
    log_level: WorkloadLogLevel,
    db_host: Option<String>,
    db_port: Option<u16>,
    db_username: Option<String>,
    db_password: Option<String>,
    ingress_ready: bool,
}

impl WorkloadBuilder {
    /// Create a builder with identity fields set and every fragment unknown.
    ///
    /// The database name defaults to the service name; relation names default
    /// to `database` and `ingress`. Override with the `with_*` methods.
    pub fn new(name: impl Into<String>, model: impl Into<String>, port: u16) -> Self {
        let name = name.into();
        WorkloadBuilder {
            db_name: name.clone(),
            command: format!("/app/{} -vvv", name),
            name,
            model: model.into(),
            port,
            db_relation_name: "database".to_string(),
            ingress_relation_name: "ingress".to_string(),
            env: None,
            log_level: WorkloadLogLevel::default(),
            db_host: None,
            db_port: None,
            db_username: None,
            db_password: None,
            ingress_ready: false,
        }
    }

    /// Override the command line the workload is started with.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    /// Override the database name requested from the relation.
    pub fn with_db_name(mut self, db_name: impl Into<String>) -> Self {
        self.db_name = db_name.into();
        self
    }

    /// Override the database relation name.
    pub fn with_db_relation_name(mut self, relation_name: impl Into<String>) -> Self {
        self.db_relation_name = relation_name.into();
        self
    }

    /// Override the ingress relation name.
    pub fn with_ingress_relation_name(mut self, relation_name: impl Into<String>) -> Self {
        self.ingress_relation_name = relation_name.into();
        self
    }

    /// Set all four database fields at once.
    ///
    /// The fields only ever arrive together (one relation data fetch), so
    /// there is no partial-credit state to represent.
    pub fn set_database(
        &mut self,
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> &mut Self {
        self.db_host = Some(host.into());
        self.db_port = Some(port);
        self.db_username = Some(username.into());
        self.db_password = Some(password.into());
        self
    }

    /// Set the database fields from a parsed endpoint plus credentials.
    pub fn set_database_endpoint(
        &mut self,
        endpoint: &Endpoint,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> &mut Self {
        self.set_database(endpoint.host.clone(), endpoint.port, username, password)
    }

    /// Set the deployment environment from a raw config string.
    ///
    /// An unrecognized value leaves the environment unset rather than
    /// guessing; see [`WorkloadEnv::parse`].
    pub fn set_env(&mut self, value: &str) -> &mut Self {
        self.env = WorkloadEnv::parse(value);
        self
    }

    /// Set the workload log level from a raw config string, falling back to
    /// `Info` for unrecognized values; see [`WorkloadLogLevel::parse`].
    pub fn set_log_level(&mut self, value: &str) -> &mut Self {
        self.log_level = WorkloadLogLevel::parse(value);
        self
    }

    /// Record the result of the ingress capability check.
    pub fn set_ingress_ready(&mut self, ready: bool) -> &mut Self {
        self.ingress_ready = ready;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    pub fn db_relation_name(&self) -> &str {
        &self.db_relation_name
    }

    pub fn ingress_relation_name(&self) -> &str {
        &self.ingress_relation_name
    }

    pub fn env(&self) -> Option<WorkloadEnv> {
        self.env
    }

    pub fn log_level(&self) -> WorkloadLogLevel {
        self.log_level
    }

    /// Evaluate readiness.
    ///
    /// First unmet precondition wins: the database is the most foundational
    /// dependency, so it is checked before the environment, which is checked
    /// before ingress. The result is a single blocking reason even when
    /// several preconditions are simultaneously unmet.
    pub fn state(&self) -> BuilderState {
        let db_ready = self.db_host.is_some()
            && self.db_port.is_some()
            && self.db_username.is_some()
            && self.db_password.is_some();

        if !db_ready {
            return BuilderState::DatabaseNotReady;
        }

        if self.env.is_none() {
            return BuilderState::EnvNotSet;
        }

        if !self.ingress_ready {
            return BuilderState::IngressNotReady;
        }

        BuilderState::Ready
    }

    /// Freeze the accumulated configuration into an immutable [`Workload`].
    ///
    /// Gated on the full readiness conjunction: any builder that is not
    /// `Ready` fails with [`ConfigError::MissingField`] naming the first
    /// unmet field in precedence order (database fields, then env, then the
    /// ingress flag). Callers check [`state`] first; hitting the error from a
    /// `Ready` builder is impossible.
    ///
    /// [`state`]: WorkloadBuilder::state
    pub fn build(&self) -> Result<Workload> {
        let db_host = self
            .db_host
            .clone()
            .ok_or(ConfigError::MissingField { field: "db_host" })?;
        let db_port = self
            .db_port
            .ok_or(ConfigError::MissingField { field: "db_port" })?;
        let db_username = self
            .db_username
            .clone()
            .ok_or(ConfigError::MissingField {
                field: "db_username",
            })?;
        let db_password = self
            .db_password
            .clone()
            .ok_or(ConfigError::MissingField {
                field: "db_password",
            })?;
        let env = self.env.ok_or(ConfigError::MissingField { field: "env" })?;

        if !self.ingress_ready {
            return Err(ConfigError::MissingField {
                field: "ingress_ready",
            });
        }

        Ok(Workload {
            env,
            model: self.model.clone(),
            name: self.name.clone(),
            port: self.port,
            command: self.command.clone(),
            log_level: self.log_level,
            db_name: self.db_name.clone(),
            db_host,
            db_port,
            db_username,
            db_password,
        })
    }
}
