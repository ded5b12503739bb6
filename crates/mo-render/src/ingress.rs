//! Ingress route definition for the workload.
//!
//! Renders the dynamic-configuration shape the Traefik ingress provider
//! consumes: one router matching the environment-selected hostname, one
//! service load-balancing to the cluster-local backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use mo_config::Workload;

/// Top-level ingress configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressConfig {
    pub http: HttpConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    pub routers: BTreeMap<String, Router>,
    pub services: BTreeMap<String, IngressService>,
}

/// A router matching requests by hostname rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Router {
    pub rule: String,
    pub service: String,
    #[serde(rename = "entryPoints")]
    pub entry_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngressService {
    #[serde(rename = "loadBalancer")]
    pub load_balancer: LoadBalancer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancer {
    pub servers: Vec<Server>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    pub url: String,
}

impl IngressConfig {
    /// Render the ingress route for a workload.
    pub fn for_workload(workload: &Workload) -> Self {
        let service_name = format!("{}_service", workload.name);

        let router = Router {
            rule: format!("Host(`{}`)", workload.external_hostname()),
            service: service_name.clone(),
            entry_points: vec!["web".to_string(), "websecure".to_string()],
        };

        let service = IngressService {
            load_balancer: LoadBalancer {
                servers: vec![Server {
                    url: workload.backend_url(),
                }],
            },
        };

        let mut routers = BTreeMap::new();
        routers.insert(workload.name.clone(), router);
        let mut services = BTreeMap::new();
        services.insert(service_name, service);

        IngressConfig {
            http: HttpConfig { routers, services },
        }
    }

    /// Serialize to the JSON shape the ingress provider expects.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mo_config::{WorkloadEnv, WorkloadLogLevel};

    fn workload(env: WorkloadEnv) -> Workload {
        Workload {
            env,
            model: "desktop".to_string(),
            name: "metrics".to_string(),
            port: 8080,
            command: "/app/metrics -vvv".to_string(),
            log_level: WorkloadLogLevel::Info,
            db_name: "metrics".to_string(),
            db_host: "10.0.0.5".to_string(),
            db_port: 5432,
            db_username: "user".to_string(),
            db_password: "pw".to_string(),
        }
    }

    #[test]
    fn test_router_rule_tracks_environment() {
        let prod = IngressConfig::for_workload(&workload(WorkloadEnv::Prod));
        assert_eq!(
            prod.http.routers["metrics"].rule,
            "Host(`metrics.ubuntu.com`)"
        );

        let stg = IngressConfig::for_workload(&workload(WorkloadEnv::Stg));
        assert_eq!(
            stg.http.routers["metrics"].rule,
            "Host(`metrics.stg.ubuntu.com`)"
        );
    }

    #[test]
    fn test_router_points_at_service_entry() {
        let config = IngressConfig::for_workload(&workload(WorkloadEnv::Prod));
        let router = &config.http.routers["metrics"];
        assert_eq!(router.service, "metrics_service");
        assert!(config.http.services.contains_key("metrics_service"));
        assert_eq!(router.entry_points, vec!["web", "websecure"]);
    }

    #[test]
    fn test_backend_server_url() {
        let config = IngressConfig::for_workload(&workload(WorkloadEnv::Local));
        let servers = &config.http.services["metrics_service"].load_balancer.servers;
        assert_eq!(servers.len(), 1);
        assert_eq!(
            servers[0].url,
            "http://metrics.desktop.svc.cluster.local:8080"
        );
    }

    #[test]
    fn test_json_field_names() {
        let json = IngressConfig::for_workload(&workload(WorkloadEnv::Prod))
            .to_json()
            .unwrap();
        assert!(json.contains("\"entryPoints\""));
        assert!(json.contains("\"loadBalancer\""));
        assert!(!json.contains("entry_points"));
    }
}
