//! Closed enumerations parsed from operator-supplied config strings.
//!
//! The two parsers deliberately disagree on failure: an unrecognized
//! environment reads as "not set" because a missing environment blocks
//! deployment, while an unrecognized log level silently falls back to `Info`
//! because a missing log level does not.

use serde::{Deserialize, Serialize};

/// Deployment environment the workload is rolled out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadEnv {
    Prod,
    Stg,
    Local,
}

impl WorkloadEnv {
    /// Parse an environment string, case-insensitively, against the
    /// canonical values. Anything else (including empty) is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "prod" => Some(WorkloadEnv::Prod),
            "stg" => Some(WorkloadEnv::Stg),
            "local" => Some(WorkloadEnv::Local),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkloadEnv::Prod => "prod",
            WorkloadEnv::Stg => "stg",
            WorkloadEnv::Local => "local",
        }
    }
}

impl std::fmt::Display for WorkloadEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Log level passed through to the workload process.
///
/// Distinct from the operator's own tracing verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadLogLevel {
    Debug,
    #[default]
    Info,
}

impl WorkloadLogLevel {
    /// Parse a log level string, case-insensitively. Total: unrecognized or
    /// empty input falls back to `Info`.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "debug" => WorkloadLogLevel::Debug,
            _ => WorkloadLogLevel::Info,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkloadLogLevel::Debug => "debug",
            WorkloadLogLevel::Info => "info",
        }
    }
}

impl std::fmt::Display for WorkloadLogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_parse_canonical() {
        assert_eq!(WorkloadEnv::parse("prod"), Some(WorkloadEnv::Prod));
        assert_eq!(WorkloadEnv::parse("stg"), Some(WorkloadEnv::Stg));
        assert_eq!(WorkloadEnv::parse("local"), Some(WorkloadEnv::Local));
    }

    #[test]
    fn test_env_parse_case_insensitive() {
        assert_eq!(WorkloadEnv::parse("PROD"), Some(WorkloadEnv::Prod));
        assert_eq!(WorkloadEnv::parse("Prod"), Some(WorkloadEnv::Prod));
        assert_eq!(WorkloadEnv::parse("pRoD"), Some(WorkloadEnv::Prod));
    }

    #[test]
    fn test_env_parse_rejects_non_canonical() {
        // Exact-value matching only, no prefixes or fuzziness.
        assert_eq!(WorkloadEnv::parse("production"), None);
        assert_eq!(WorkloadEnv::parse("staging"), None);
        assert_eq!(WorkloadEnv::parse(""), None);
        assert_eq!(WorkloadEnv::parse("prod "), None);
    }

    #[test]
    fn test_env_display() {
        assert_eq!(WorkloadEnv::Prod.to_string(), "prod");
        assert_eq!(WorkloadEnv::Stg.to_string(), "stg");
        assert_eq!(WorkloadEnv::Local.to_string(), "local");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(WorkloadLogLevel::parse("debug"), WorkloadLogLevel::Debug);
        assert_eq!(WorkloadLogLevel::parse("DEBUG"), WorkloadLogLevel::Debug);
        assert_eq!(WorkloadLogLevel::parse("info"), WorkloadLogLevel::Info);
    }

    #[test]
    fn test_log_level_falls_back_to_info() {
        assert_eq!(WorkloadLogLevel::parse(""), WorkloadLogLevel::Info);
        assert_eq!(WorkloadLogLevel::parse("verbose"), WorkloadLogLevel::Info);
        assert_eq!(WorkloadLogLevel::parse("warn"), WorkloadLogLevel::Info);
    }

    #[test]
    fn test_log_level_default_is_info() {
        assert_eq!(WorkloadLogLevel::default(), WorkloadLogLevel::Info);
    }

    #[test]
    fn test_env_serde_lowercase() {
        assert_eq!(serde_json::to_string(&WorkloadEnv::Stg).unwrap(), "\"stg\"");
        assert_eq!(
            serde_json::to_string(&WorkloadLogLevel::Debug).unwrap(),
            "\"debug\""
        );
    }
}
