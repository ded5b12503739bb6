//! Readiness-driven controller for the metrics workload.
//!
//! This crate wires the pure aggregation core (`mo-config`) and the
//! renderers (`mo-render`) to the outside world:
//! - Collaborator traits for the container runtime, relations, and config
//! - The controller that re-runs one aggregation cycle per external signal
//! - The workload version probe
//! - Logging initialization for the agent process
//!
//! The binary entry point is in `main.rs`.

pub mod controller;
pub mod error;
pub mod logging;
pub mod probe;
pub mod relations;
pub mod signal;
pub mod status;

pub use controller::Controller;
pub use error::{AgentError, Result};
pub use signal::Signal;
pub use status::UnitStatus;
