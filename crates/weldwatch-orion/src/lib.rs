//! Orion context-broker client: endpoint construction, the FIWARE
//! request context attached to every call, and the entity
//! upsert/list/subscribe operations over a pluggable JSON transport.

mod client;
mod config;
mod context;
mod endpoints;
mod error;
mod estimate_publisher;
mod subscription;
mod transport;

pub use client::OrionClient;
pub use config::OrionConfig;
pub use context::{FiwareContext, CORRELATOR_HEADER, SERVICE_HEADER, SERVICE_PATH_HEADER};
pub use endpoints::OrionEndpoints;
pub use error::{OrionError, OrionResult};
pub use estimate_publisher::OrionEstimatePublisher;
pub use subscription::entity_type_subscription;
#[cfg(feature = "testing")]
pub use transport::MockJsonTransport;
pub use transport::{JsonTransport, ReqwestTransport};
