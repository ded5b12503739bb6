//! Dry-run CLI for the metrics operator agent.
//!
//! Feeds one aggregation cycle from CLI-supplied fragments through the
//! controller against in-memory collaborators, then prints the rendered
//! layer and ingress route as JSON on stdout, or the blocking status on
//! stderr. Useful for inspecting exactly what would be deployed for a given
//! set of relation data.

use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing::info;

use mo_agent::controller::Controller;
use mo_agent::logging::{self, LogFormat};
use mo_agent::relations::{
    ContainerRuntime, IngressPublisher, StaticConfig, StaticDatabase, StaticIngress,
};
use mo_agent::{Result, Signal};
use mo_config::WorkloadBuilder;
use mo_render::{IngressConfig, Layer};

#[derive(Debug, Parser)]
#[command(
    name = "mo-agent",
    about = "Aggregate workload configuration and render deployment artifacts"
)]
struct Cli {
    /// Workload service name.
    #[arg(long, default_value = "metrics")]
    name: String,

    /// Model (namespace) the workload runs in.
    #[arg(long, default_value = "desktop")]
    model: String,

    /// Workload listening port.
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Command line the workload is started with.
    #[arg(long)]
    command: Option<String>,

    /// Deployment environment (prod, stg, local).
    #[arg(long, env = "MO_ENV")]
    env: Option<String>,

    /// Workload log level (debug, info).
    #[arg(long, env = "MO_WORKLOAD_LOG_LEVEL")]
    workload_log_level: Option<String>,

    /// Database endpoint as host:port.
    #[arg(long)]
    db_endpoint: Option<String>,

    #[arg(long)]
    db_username: Option<String>,

    #[arg(long)]
    db_password: Option<String>,

    /// Treat the ingress capability as ready.
    #[arg(long)]
    ingress_ready: bool,

    /// Agent log output format.
    #[arg(long, default_value = "human", value_parser = parse_log_format)]
    log_format: LogFormat,
}

fn parse_log_format(s: &str) -> std::result::Result<LogFormat, String> {
    s.parse()
}

/// Container stand-in that records the layer instead of replanning one.
#[derive(Debug, Clone, Default)]
struct DryRunContainer {
    layer: Arc<Mutex<Option<Layer>>>,
    opened_port: Arc<Mutex<Option<u16>>>,
}

impl ContainerRuntime for DryRunContainer {
    fn can_connect(&self) -> bool {
        true
    }

    fn apply_layer(&mut self, _service: &str, layer: &Layer) -> Result<()> {
        *self.layer.lock().unwrap() = Some(layer.clone());
        Ok(())
    }

    fn open_port(&mut self, port: u16) -> Result<()> {
        *self.opened_port.lock().unwrap() = Some(port);
        Ok(())
    }
}

/// Ingress stand-in that records the route instead of publishing it.
#[derive(Debug, Clone, Default)]
struct DryRunIngress {
    route: Arc<Mutex<Option<IngressConfig>>>,
}

impl IngressPublisher for DryRunIngress {
    fn publish(&mut self, config: &IngressConfig) -> Result<()> {
        *self.route.lock().unwrap() = Some(config.clone());
        Ok(())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.log_format);

    let run_id = logging::generate_run_id();
    info!(run_id = %run_id, name = %cli.name, model = %cli.model, "starting dry run");

    let mut builder = WorkloadBuilder::new(cli.name.clone(), cli.model.clone(), cli.port);
    if let Some(command) = &cli.command {
        builder = builder.with_command(command.clone());
    }

    let mut config = StaticConfig::new();
    if let Some(env) = &cli.env {
        config = config.with("env", env.clone());
    }
    if let Some(level) = &cli.workload_log_level {
        config = config.with("log_level", level.clone());
    }

    let database = match (&cli.db_endpoint, &cli.db_username, &cli.db_password) {
        (Some(endpoint), Some(username), Some(password)) => {
            StaticDatabase::with_unit(endpoint.clone(), username.clone(), password.clone())
        }
        _ => StaticDatabase::empty(),
    };

    let container = DryRunContainer::default();
    let publisher = DryRunIngress::default();
    let layer = container.layer.clone();
    let route = publisher.route.clone();

    let mut controller = Controller::new(
        builder,
        Box::new(config),
        Box::new(database),
        Box::new(StaticIngress::new(cli.ingress_ready)),
        Box::new(container),
        Box::new(publisher),
    );

    // One cycle per signal, in the order the events would fire on startup.
    for signal in [
        Signal::ConfigChanged,
        Signal::DatabaseChanged,
        Signal::IngressChanged,
        Signal::ContainerReady,
    ] {
        let status = controller.handle(signal);
        info!(signal = %signal, status = %status, "cycle complete");
    }

    if !controller.status().is_active() {
        eprintln!("{}", controller.status());
        return ExitCode::FAILURE;
    }

    let layer = layer.lock().unwrap().clone();
    let route = route.lock().unwrap().clone();
    let artifacts = serde_json::json!({
        "layer": layer,
        "ingress": route,
    });

    match serde_json::to_string_pretty(&artifacts) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("failed to serialize artifacts: {}", err);
            ExitCode::FAILURE
        }
    }
}
