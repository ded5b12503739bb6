//! Logging for the agent process.
//!
//! Dual-mode output on stderr:
//! - Human-readable console format for interactive use
//! - Machine-parseable JSON lines for automation
//!
//! stdout stays reserved for rendered artifacts. The workload's own log
//! level (`mo_config::WorkloadLogLevel`) is unrelated: that one is shipped
//! to the workload process, this one filters the agent's tracing output.

use std::io::IsTerminal;
use std::str::FromStr;

use tracing_subscriber::{fmt, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable console format (default).
    #[default]
    Human,
    /// Machine-parseable JSON lines.
    Jsonl,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "console" | "pretty" => Ok(LogFormat::Human),
            "jsonl" | "json" | "machine" => Ok(LogFormat::Jsonl),
            _ => Err(format!("unknown log format: {}", s)),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Human => write!(f, "human"),
            LogFormat::Jsonl => write!(f, "jsonl"),
        }
    }
}

/// Initialize the logging subsystem.
///
/// Must be called once at startup. The filter comes from `MO_LOG`, then
/// `RUST_LOG`, then defaults to `info` for the workspace crates.
pub fn init_logging(format: LogFormat) {
    let filter = std::env::var("MO_LOG")
        .ok()
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("mo_agent=info,mo_config=info,mo_render=info"));

    match format {
        LogFormat::Human => {
            let use_ansi = std::io::stderr().is_terminal();
            fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_ansi(use_ansi)
                .init();
        }
        LogFormat::Jsonl => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Generate a unique run ID for this invocation.
pub fn generate_run_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    // First 12 hex chars are plenty for correlation.
    format!("run-{}", &uuid.to_string()[..12])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("human".parse::<LogFormat>().unwrap(), LogFormat::Human);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Jsonl);
        assert!("verbose".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_log_format_display_round_trip() {
        assert_eq!(LogFormat::Jsonl.to_string(), "jsonl");
        assert_eq!(
            LogFormat::Jsonl.to_string().parse::<LogFormat>().unwrap(),
            LogFormat::Jsonl
        );
    }

    #[test]
    fn test_generate_run_id() {
        let id1 = generate_run_id();
        let id2 = generate_run_id();
        assert!(id1.starts_with("run-"));
        assert_eq!(id1.len(), 16);
        assert_ne!(id1, id2);
    }
}
