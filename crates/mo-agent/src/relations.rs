//! Collaborator traits at the agent's I/O seams.
//!
//! The controller only ever talks to these traits; production impls wrap the
//! real relation/runtime plumbing, tests and the dry-run CLI use the
//! in-memory impls below.

use std::collections::BTreeMap;

use mo_render::{IngressConfig, Layer};

use crate::error::Result;

/// Raw data one related database unit published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseRelationData {
    /// `host:port` endpoint string, verbatim from the relation.
    pub endpoints: String,
    pub username: String,
    pub password: String,
}

/// Source of operator-supplied configuration values.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// The database relation: returns whatever each related unit currently
/// publishes. Units that have published nothing yet are simply absent.
pub trait DatabaseRelation {
    fn fetch(&self) -> Vec<DatabaseRelationData>;
}

/// The ingress capability check.
pub trait IngressRelation {
    fn is_ready(&self) -> bool;
}

/// The container runtime managing the workload process.
pub trait ContainerRuntime {
    fn can_connect(&self) -> bool;
    fn apply_layer(&mut self, service: &str, layer: &Layer) -> Result<()>;
    fn open_port(&mut self, port: u16) -> Result<()>;
}

/// Sink for the rendered ingress route.
pub trait IngressPublisher {
    fn publish(&mut self, config: &IngressConfig) -> Result<()>;
}

/// In-memory config source backed by a key/value map.
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    values: BTreeMap<String, String>,
}

impl StaticConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigSource for StaticConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// In-memory database relation with zero or one related unit.
#[derive(Debug, Clone, Default)]
pub struct StaticDatabase {
    data: Option<DatabaseRelationData>,
}

impl StaticDatabase {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_unit(
        endpoints: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        StaticDatabase {
            data: Some(DatabaseRelationData {
                endpoints: endpoints.into(),
                username: username.into(),
                password: password.into(),
            }),
        }
    }
}

impl DatabaseRelation for StaticDatabase {
    fn fetch(&self) -> Vec<DatabaseRelationData> {
        self.data.clone().into_iter().collect()
    }
}

/// In-memory ingress readiness flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticIngress {
    pub ready: bool,
}

impl StaticIngress {
    pub fn new(ready: bool) -> Self {
        StaticIngress { ready }
    }
}

impl IngressRelation for StaticIngress {
    fn is_ready(&self) -> bool {
        self.ready
    }
}
