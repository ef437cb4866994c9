use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{debug, info};
use weldwatch_ngsi::{decode_entity, encode_entity, GenericEntity, NgsiEntity};

use crate::config::OrionConfig;
use crate::context::FiwareContext;
use crate::endpoints::OrionEndpoints;
use crate::error::OrionResult;
use crate::transport::{JsonTransport, ReqwestTransport};

/// Client for the Orion context broker.
///
/// Holds only immutable configuration, so one instance can be shared
/// across call sites. Every operation is exactly one HTTP request with
/// the FIWARE context attached; failures surface unretried, resilience
/// belongs to the caller.
#[derive(Clone)]
pub struct OrionClient {
    endpoints: OrionEndpoints,
    context: FiwareContext,
    transport: Arc<dyn JsonTransport>,
}

impl OrionClient {
    /// Client over the default reqwest transport.
    pub fn new(base_url: &str, context: FiwareContext) -> OrionResult<Self> {
        Ok(Self::with_transport(
            OrionEndpoints::new(base_url)?,
            context,
            Arc::new(ReqwestTransport::new()),
        ))
    }

    /// Client over a caller-supplied transport.
    pub fn with_transport(
        endpoints: OrionEndpoints,
        context: FiwareContext,
        transport: Arc<dyn JsonTransport>,
    ) -> Self {
        Self {
            endpoints,
            context,
            transport,
        }
    }

    /// Client from connection settings, with a generated correlator.
    pub fn from_config(config: &OrionConfig) -> OrionResult<Self> {
        Self::new(
            &config.base_url,
            FiwareContext::with_generated_correlator(&config.service, &config.service_path),
        )
    }

    /// Create-or-replace a single entity.
    pub async fn upsert_entity<E: NgsiEntity>(&self, entity: &E) -> OrionResult<()> {
        let url = self.endpoints.entities(&[("options", "upsert")]);
        let record = encode_entity(entity)?;

        debug!(entity_id = %entity.id(), entity_type = E::TYPE, "Upserting entity");

        self.transport
            .post_json(url, self.context.headers()?, record)
            .await
    }

    /// Create-or-replace a batch of entities in one round trip. The
    /// batch is a wire-level grouping only: on failure the caller must
    /// not assume partial visibility. An empty batch issues no request.
    pub async fn upsert_entities<E: NgsiEntity>(&self, entities: &[E]) -> OrionResult<()> {
        if entities.is_empty() {
            debug!("No entities to upsert, skipping");
            return Ok(());
        }

        let records = entities
            .iter()
            .map(encode_entity)
            .collect::<Result<Vec<_>, _>>()?;
        let url = self.endpoints.update_op();

        debug!(
            entity_count = records.len(),
            entity_type = E::TYPE,
            "Upserting entity batch"
        );

        self.transport
            .post_json(url, self.context.headers()?, json!({ "entities": records }))
            .await
    }

    /// List every entity the broker holds, schema-less: attributes are
    /// returned verbatim, nothing is dropped.
    pub async fn list_entities(&self) -> OrionResult<Vec<GenericEntity>> {
        let url = self.endpoints.entities(&[]);
        let payload = self
            .transport
            .get_json(url, self.context.headers()?)
            .await?;
        Ok(serde_json::from_value(payload)?)
    }

    /// List the entities of schema `E`, decoded against it.
    pub async fn list_entities_of_type<E: NgsiEntity>(&self) -> OrionResult<Vec<E>> {
        let url = self.endpoints.entities(&[("type", E::TYPE)]);
        let payload = self
            .transport
            .get_json(url, self.context.headers()?)
            .await?;

        let records: Vec<Value> = serde_json::from_value(payload)?;
        let entities = records
            .iter()
            .map(decode_entity)
            .collect::<Result<Vec<E>, _>>()?;
        Ok(entities)
    }

    /// Register a subscription. The body is broker-defined and passed
    /// through opaquely.
    pub async fn subscribe(&self, subscription: &Value) -> OrionResult<()> {
        let url = self.endpoints.subscriptions();

        info!("Registering broker subscription");

        self.transport
            .post_json(url, self.context.headers()?, subscription.clone())
            .await
    }

    /// List registered subscriptions as raw broker objects.
    pub async fn list_subscriptions(&self) -> OrionResult<Vec<Value>> {
        let url = self.endpoints.subscriptions();
        let payload = self
            .transport
            .get_json(url, self.context.headers()?)
            .await?;
        Ok(serde_json::from_value(payload)?)
    }
}
