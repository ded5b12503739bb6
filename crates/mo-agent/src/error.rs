//! Error types for the agent.

use thiserror::Error;

/// Result type alias for agent operations.
pub type Result<T> = std::result::Result<T, AgentError>;

/// Errors raised while deploying an assembled workload.
///
/// Incomplete configuration is not an error: it is the everyday
/// [`BuilderState`](mo_config::BuilderState) while dependencies come up in
/// arbitrary order, and it surfaces as a waiting status, never as a variant
/// here.
#[derive(Error, Debug)]
pub enum AgentError {
    /// The aggregation core rejected a build or an endpoint string.
    #[error("configuration error: {0}")]
    Config(#[from] mo_config::ConfigError),

    /// A container runtime operation failed.
    #[error("container operation failed: {0}")]
    Container(String),

    /// Publishing the ingress route failed.
    #[error("ingress publish failed: {0}")]
    Ingress(String),
}
