//! External signals that trigger an aggregation cycle.

use serde::{Deserialize, Serialize};

/// One external event relevant to the workload lifecycle.
///
/// Signals carry no payload: the controller re-fetches whatever each
/// collaborator currently knows on every cycle, so a stale or duplicated
/// signal is harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// The workload container is up and accepting layer changes.
    ContainerReady,
    /// The database relation was created or its endpoints changed.
    DatabaseChanged,
    /// The database relation went away.
    DatabaseBroken,
    /// The ingress relation was created, changed, or revoked.
    IngressChanged,
    /// Operator configuration changed.
    ConfigChanged,
    /// This unit gained or lost leadership.
    LeaderChanged,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Signal::ContainerReady => "container_ready",
            Signal::DatabaseChanged => "database_changed",
            Signal::DatabaseBroken => "database_broken",
            Signal::IngressChanged => "ingress_changed",
            Signal::ConfigChanged => "config_changed",
            Signal::LeaderChanged => "leader_changed",
        };
        write!(f, "{}", name)
    }
}
