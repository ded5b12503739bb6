//! Rendering of deployment artifacts from a complete workload descriptor.
//!
//! Two renderers, both pure data-to-data:
//! - [`layer`]: the container process layer (service command, environment)
//! - [`ingress`]: the ingress routing rule (hostname, backend address)
//!
//! Both consume a [`mo_config::Workload`], so a partially-populated
//! configuration can never reach them.

pub mod ingress;
pub mod layer;

pub use ingress::IngressConfig;
pub use layer::Layer;
