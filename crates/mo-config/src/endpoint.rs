//! Database endpoint parsing.
//!
//! Relation data carries the database address as a single `host:port` string;
//! the builder wants the pieces separately.

use std::str::FromStr;

use crate::error::ConfigError;

/// A `host:port` pair from relation data.
///
/// The host is accepted verbatim; only the shape of the string and the port
/// number are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl FromStr for Endpoint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Split on the last colon so IPv6-ish hosts keep their colons.
        let (host, port) = s
            .rsplit_once(':')
            .ok_or_else(|| ConfigError::InvalidEndpoint(s.to_string()))?;

        if host.is_empty() {
            return Err(ConfigError::InvalidEndpoint(s.to_string()));
        }

        let port: u16 = port
            .parse()
            .map_err(|_| ConfigError::InvalidEndpoint(s.to_string()))?;

        Ok(Endpoint {
            host: host.to_string(),
            port,
        })
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
