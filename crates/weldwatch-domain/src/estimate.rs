use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::anomaly::AnomalyDetectionEntity;
use crate::error::DomainResult;
use crate::machine::MachineEntity;

/// Capability producing an anomaly score for one machine sample.
/// The model host implements this; the service never loads a model
/// itself.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait AnomalyScorer: Send + Sync {
    /// Score a machine sample; higher means more anomalous.
    fn score(&self, machine: &MachineEntity) -> DomainResult<f64>;
}

/// Sink for anomaly estimates. Infrastructure (the Orion client crate)
/// implements this trait.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait EstimatePublisher: Send + Sync {
    /// Publish a batch of estimates in one broker round trip.
    async fn publish_estimates(&self, estimates: &[AnomalyDetectionEntity]) -> DomainResult<()>;
}

/// Domain service that turns machine updates into anomaly estimates.
///
/// Flow:
/// 1. Score every machine through the injected scorer
/// 2. Build one estimate per machine, keyed by the machine's id
/// 3. Publish the whole batch through the publisher
pub struct EstimateService {
    scorer: Arc<dyn AnomalyScorer>,
    publisher: Arc<dyn EstimatePublisher>,
}

impl EstimateService {
    pub fn new(scorer: Arc<dyn AnomalyScorer>, publisher: Arc<dyn EstimatePublisher>) -> Self {
        Self { scorer, publisher }
    }

    /// Process a batch of updated machines end to end. An empty batch
    /// is a no-op.
    pub async fn process_update(&self, machines: &[MachineEntity]) -> DomainResult<()> {
        if machines.is_empty() {
            debug!("No machine updates to process, skipping");
            return Ok(());
        }

        debug!(machine_count = machines.len(), "Scoring machine updates");

        let mut estimates = Vec::with_capacity(machines.len());
        for machine in machines {
            let score = self.scorer.score(machine)?;
            debug!(machine_id = %machine.id, score, "Scored machine sample");
            estimates.push(AnomalyDetectionEntity::from_score(machine.id.clone(), score));
        }

        self.publisher.publish_estimates(&estimates).await?;

        info!(
            estimate_count = estimates.len(),
            "Published anomaly estimates"
        );
        Ok(())
    }
}
