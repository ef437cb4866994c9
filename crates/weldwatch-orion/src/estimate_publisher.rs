use anyhow::Context;
use async_trait::async_trait;
use tracing::debug;
use weldwatch_domain::{AnomalyDetectionEntity, DomainError, DomainResult, EstimatePublisher};

use crate::client::OrionClient;

/// Publishes anomaly estimates by batch-upserting them into Orion.
/// The domain service sees only the [`EstimatePublisher`] trait.
pub struct OrionEstimatePublisher {
    client: OrionClient,
}

impl OrionEstimatePublisher {
    pub fn new(client: OrionClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EstimatePublisher for OrionEstimatePublisher {
    async fn publish_estimates(&self, estimates: &[AnomalyDetectionEntity]) -> DomainResult<()> {
        debug!(
            estimate_count = estimates.len(),
            "Publishing estimates to Orion"
        );

        self.client
            .upsert_entities(estimates)
            .await
            .context("Failed to upsert anomaly estimates")
            .map_err(DomainError::Publish)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::FiwareContext;
    use crate::endpoints::OrionEndpoints;
    use crate::transport::MockJsonTransport;
    use serde_json::json;
    use std::sync::Arc;

    fn publisher(transport: MockJsonTransport) -> OrionEstimatePublisher {
        OrionEstimatePublisher::new(OrionClient::with_transport(
            OrionEndpoints::new("http://host:1026").unwrap(),
            FiwareContext::new("smart_factory", "/welding", "corr-1"),
            Arc::new(transport),
        ))
    }

    #[tokio::test]
    async fn test_publishes_the_batch_through_the_update_op() {
        // Arrange
        let mut transport = MockJsonTransport::new();
        transport
            .expect_post_json()
            .withf(|url, _, body| {
                url.as_str() == "http://host:1026/v2/op/update"
                    && body
                        == &json!({"entities": [{
                            "id": "urn:ngsi-ld:Machine:1",
                            "type": "AnomalyDetection",
                            "Label": {"type": "Number", "value": 0.9}
                        }]})
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let estimates = vec![AnomalyDetectionEntity::from_score("urn:ngsi-ld:Machine:1", 0.9)];

        // Act
        let result = publisher(transport).publish_estimates(&estimates).await;

        // Assert
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_broker_failure_becomes_a_domain_publish_error() {
        // Arrange
        let mut transport = MockJsonTransport::new();
        transport.expect_post_json().times(1).returning(|_, _, _| {
            Err(crate::error::OrionError::UnexpectedStatus {
                status: 500,
                body: "boom".to_string(),
            })
        });

        let estimates = vec![AnomalyDetectionEntity::from_score("urn:ngsi-ld:Machine:1", 0.9)];

        // Act
        let result = publisher(transport).publish_estimates(&estimates).await;

        // Assert
        assert!(matches!(result, Err(DomainError::Publish(_))));
    }
}
