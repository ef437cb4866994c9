use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entity::{decode_entity, NgsiEntity};
use crate::error::NgsiResult;

/// Inbound `{"data": [...]}` body pushed by the broker on subscription
/// match. Records are heterogeneous; consumers pick a schema out with
/// [`filter_entities`](Self::filter_entities).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityUpdateNotification {
    pub data: Vec<Value>,
}

impl EntityUpdateNotification {
    /// Selects the records whose type tag equals `E::TYPE` and decodes
    /// them against the schema, preserving batch order. Records of
    /// other types (or with no type at all) are skipped without error;
    /// a matching record that then fails to decode is an error.
    pub fn filter_entities<E: NgsiEntity>(&self) -> NgsiResult<Vec<E>> {
        self.data
            .iter()
            .filter(|record| record.get("type").and_then(Value::as_str) == Some(E::TYPE))
            .map(decode_entity)
            .collect()
    }
}
