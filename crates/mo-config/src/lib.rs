//! Workload configuration aggregation for the metrics operator.
//!
//! This crate provides:
//! - Closed-enum parsers for the deployment environment and workload log level
//! - A partially-populated workload builder fed field-wise by relation events
//! - Readiness evaluation with a fixed precedence order
//! - A frozen, fully-populated workload descriptor
//!
//! The crate is pure: no I/O, no logging. Callers decide what to log after
//! reading the builder state.

pub mod builder;
pub mod endpoint;
pub mod env;
pub mod error;
pub mod workload;

pub use builder::{BuilderState, WorkloadBuilder};
pub use endpoint::Endpoint;
pub use env::{WorkloadEnv, WorkloadLogLevel};
pub use error::{ConfigError, Result};
pub use workload::Workload;
