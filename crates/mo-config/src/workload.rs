//! The frozen workload descriptor.

use serde::{Deserialize, Serialize};

use crate::env::{WorkloadEnv, WorkloadLogLevel};

/// A fully-populated, immutable workload description.
///
/// Produced by [`WorkloadBuilder::build`](crate::WorkloadBuilder::build) once
/// every fragment is known. Plain value: freely clonable, no link back to the
/// builder that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    pub env: WorkloadEnv,

    pub model: String,
    pub name: String,
    pub port: u16,
    pub command: String,
    pub log_level: WorkloadLogLevel,

    pub db_name: String,
    pub db_host: String,
    pub db_port: u16,
    pub db_username: String,
    pub db_password: String,
}

impl Workload {
    /// Public hostname the ingress route answers on, selected by environment.
    pub fn external_hostname(&self) -> String {
        match self.env {
            WorkloadEnv::Prod => format!("{}.ubuntu.com", self.name),
            WorkloadEnv::Stg => format!("{}.stg.ubuntu.com", self.name),
            WorkloadEnv::Local => format!("{}.ubuntu.local", self.name),
        }
    }

    /// Postgres connection URI handed to the workload process.
    pub fn db_connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.db_username, self.db_password, self.db_host, self.db_port, self.db_name
        )
    }

    /// Cluster-local URL the ingress load balancer forwards to.
    pub fn backend_url(&self) -> String {
        format!(
            "http://{}.{}.svc.cluster.local:{}",
            self.name, self.model, self.port
        )
    }

    /// Local URL for probing the running workload. Omit the leading `/`:
    /// `api_url("about")` gives `http://localhost:8080/about`.
    pub fn api_url(&self, path: &str) -> String {
        format!("http://localhost:{}/{}", self.port, path)
    }
}
