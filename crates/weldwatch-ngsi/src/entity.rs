use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{NgsiError, NgsiResult};

/// Namespace prefix for broker entity identifiers.
pub const URN_PREFIX: &str = "urn:ngsi-ld";

/// A typed NGSI v2 entity schema: a fixed type tag plus a closed set of
/// optional attribute slots.
///
/// Implementors are plain serde structs whose field order is the wire
/// order and whose unset slots are skipped on encode. Keys outside the
/// schema are dropped on decode, so brokers may grow entities without
/// breaking older consumers.
pub trait NgsiEntity: Serialize + DeserializeOwned {
    /// Type tag emitted in the `type` field of every record of this
    /// schema.
    const TYPE: &'static str;

    /// Namespaced entity identifier.
    fn id(&self) -> &str;

    /// Builds the `urn:ngsi-ld:<Type>:<local_id>` identifier for this
    /// schema. The result depends only on the schema's type tag and the
    /// local id, so re-deriving always yields the same value.
    fn type_prefixed_id(local_id: &str) -> NgsiResult<String> {
        if local_id.is_empty() {
            return Err(NgsiError::EmptyLocalId);
        }
        Ok(format!("{URN_PREFIX}:{}:{local_id}", Self::TYPE))
    }
}

/// Encodes an entity into its wire object: `id`, `type`, then every set
/// attribute in schema declaration order. Unset slots are omitted.
pub fn encode_entity<E: NgsiEntity>(entity: &E) -> NgsiResult<Value> {
    serde_json::to_value(entity).map_err(|source| NgsiError::Format {
        entity_type: E::TYPE,
        source,
    })
}

/// Decodes a wire record against schema `E`. `id` and `type` are
/// required; keys outside the schema are dropped; attribute slots
/// missing from the record stay unset.
pub fn decode_entity<E: NgsiEntity>(record: &Value) -> NgsiResult<E> {
    serde_json::from_value(record.clone()).map_err(|source| NgsiError::Format {
        entity_type: E::TYPE,
        source,
    })
}

/// Schema-less entity record, as returned by unfiltered broker
/// listings. Attributes are carried verbatim; nothing is dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenericEntity {
    pub id: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(flatten)]
    pub attributes: serde_json::Map<String, Value>,
}
