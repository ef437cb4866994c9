//! Domain model for the welding-cell anomaly pipeline: the entity
//! schemas exchanged with the context broker, raw-reading ingestion,
//! the schema registry and the estimate service orchestrating
//! score-and-publish.

mod anomaly;
mod error;
mod estimate;
mod machine;
mod reading;
mod registry;

pub use anomaly::AnomalyDetectionEntity;
pub use error::{DomainError, DomainResult};
pub use estimate::{AnomalyScorer, EstimatePublisher, EstimateService};
#[cfg(feature = "testing")]
pub use estimate::{MockAnomalyScorer, MockEstimatePublisher};
pub use machine::MachineEntity;
pub use reading::RawReading;
pub use registry::{DecodedEntity, SchemaDescriptor, SchemaRegistry};
