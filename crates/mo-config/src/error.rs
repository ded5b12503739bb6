//! Error types for workload configuration.

use thiserror::Error;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while aggregating or finalizing workload configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A workload was built from a store that is missing a required field.
    ///
    /// Reaching this from the controller is a programming error: callers must
    /// check [`WorkloadBuilder::state`](crate::WorkloadBuilder::state) first.
    #[error("required field `{field}` is not set")]
    MissingField { field: &'static str },

    /// An endpoint string did not match the `host:port` form.
    #[error("invalid endpoint `{0}`: expected `host:port`")]
    InvalidEndpoint(String),
}
