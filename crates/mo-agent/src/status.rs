//! Operator-facing unit status.

use serde::{Deserialize, Serialize};

/// The status the agent reports after each aggregation cycle.
///
/// Waiting states carry the single blocking reason from the readiness
/// evaluation; no stack traces or raw errors reach this channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum UnitStatus {
    /// A precondition is not yet satisfied; expected while relations come up.
    Waiting(String),
    /// A deploy step failed; needs attention.
    Blocked(String),
    /// The workload is configured and running.
    Active(String),
}

impl UnitStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, UnitStatus::Active(_))
    }
}

impl std::fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitStatus::Waiting(msg) => write!(f, "waiting: {}", msg),
            UnitStatus::Blocked(msg) => write!(f, "blocked: {}", msg),
            UnitStatus::Active(msg) => write!(f, "active: {}", msg),
        }
    }
}
