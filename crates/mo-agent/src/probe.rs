//! HTTP probe for the running workload's version.

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

/// Probe timeout; generous because the workload may still be warming up.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Payload of the workload's `/about` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub version: String,
}

/// Fetch the workload version from its `/about` URL.
///
/// Total: any transport or parse failure yields `"unknown"` rather than an
/// error, since the version is informational only.
pub fn fetch_version(url: &str, timeout: Duration) -> String {
    let agent = ureq::AgentBuilder::new().timeout(timeout).build();

    match agent.get(url).call() {
        Ok(response) => match response.into_json::<About>() {
            Ok(about) => about.version,
            Err(err) => {
                warn!(url = %url, error = %err, "failed to parse /about response");
                "unknown".to_string()
            }
        },
        Err(err) => {
            warn!(url = %url, error = %err, "version probe failed");
            "unknown".to_string()
        }
    }
}
