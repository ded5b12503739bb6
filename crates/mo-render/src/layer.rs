//! Process layer definition for the workload container.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use mo_config::Workload;

/// A container process layer: one managed service plus its environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer {
    pub summary: String,
    pub services: BTreeMap<String, Service>,
}

/// One service entry in a process layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "override")]
    pub override_: String,
    pub summary: String,
    pub startup: String,
    pub command: String,
    pub environment: BTreeMap<String, String>,
}

impl Layer {
    /// Render the base layer for a workload.
    ///
    /// The environment carries the listening port, the workload log level,
    /// and the database connection URI.
    pub fn for_workload(workload: &Workload) -> Self {
        let mut environment = BTreeMap::new();
        environment.insert(serverport_var(&workload.name), workload.port.to_string());
        environment.insert("LOG_LEVEL".to_string(), workload.log_level.to_string());
        environment.insert("DB_URI".to_string(), workload.db_connection_string());

        let service = Service {
            override_: "replace".to_string(),
            summary: format!("{} config layer", workload.name),
            startup: "enabled".to_string(),
            command: workload.command.clone(),
            environment,
        };

        let mut services = BTreeMap::new();
        services.insert(workload.name.clone(), service);

        Layer {
            summary: format!("{} base layer definition", workload.name),
            services,
        }
    }

    /// Serialize to the JSON shape the container runtime expects.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Environment variable carrying the listening port, e.g. `METRICS_SERVERPORT`.
fn serverport_var(name: &str) -> String {
    format!("{}_SERVERPORT", name.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mo_config::{WorkloadEnv, WorkloadLogLevel};

    fn workload() -> Workload {
        Workload {
            env: WorkloadEnv::Prod,
            model: "desktop".to_string(),
            name: "metrics".to_string(),
            port: 8080,
            command: "/app/metrics -vvv".to_string(),
            log_level: WorkloadLogLevel::Debug,
            db_name: "metrics".to_string(),
            db_host: "10.0.0.5".to_string(),
            db_port: 5432,
            db_username: "user".to_string(),
            db_password: "pw".to_string(),
        }
    }

    #[test]
    fn test_layer_service_entry() {
        let layer = Layer::for_workload(&workload());
        assert_eq!(layer.summary, "metrics base layer definition");

        let service = layer.services.get("metrics").expect("service entry");
        assert_eq!(service.override_, "replace");
        assert_eq!(service.startup, "enabled");
        assert_eq!(service.command, "/app/metrics -vvv");
    }

    #[test]
    fn test_layer_environment() {
        let layer = Layer::for_workload(&workload());
        let env = &layer.services["metrics"].environment;
        assert_eq!(env["METRICS_SERVERPORT"], "8080");
        assert_eq!(env["LOG_LEVEL"], "debug");
        assert_eq!(env["DB_URI"], "postgresql://user:pw@10.0.0.5:5432/metrics");
    }

    #[test]
    fn test_layer_json_shape() {
        let json = Layer::for_workload(&workload()).to_json().unwrap();
        // The runtime keys on the literal `override` field name.
        assert!(json.contains("\"override\": \"replace\""));
        assert!(json.contains("\"METRICS_SERVERPORT\": \"8080\""));
        assert!(!json.contains("override_"));
    }

    #[test]
    fn test_serverport_var_uppercases_name() {
        assert_eq!(serverport_var("reportd"), "REPORTD_SERVERPORT");
    }
}
