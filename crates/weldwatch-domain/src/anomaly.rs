use serde::{Deserialize, Serialize};
use weldwatch_ngsi::{NgsiEntity, NgsiResult, NumberAttr};

/// Anomaly estimate for one machine sample. Keyed by the *machine's*
/// id so the broker holds exactly one current estimate per machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyDetectionEntity {
    pub id: String,
    #[serde(rename = "type")]
    tag: AnomalyTag,
    #[serde(rename = "Label", default, skip_serializing_if = "Option::is_none")]
    pub label: Option<NumberAttr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum AnomalyTag {
    AnomalyDetection,
}

impl AnomalyDetectionEntity {
    /// Entity with an already-namespaced id and no label set.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: AnomalyTag::AnomalyDetection,
            label: None,
        }
    }

    /// Entity with the namespaced id derived from `local_id`.
    pub fn with_local_id(local_id: &str) -> NgsiResult<Self> {
        Ok(Self::with_id(Self::type_prefixed_id(local_id)?))
    }

    /// Estimate carrying `score` as its label.
    pub fn from_score(id: impl Into<String>, score: f64) -> Self {
        Self {
            label: Some(NumberAttr::new(score)),
            ..Self::with_id(id)
        }
    }
}

impl NgsiEntity for AnomalyDetectionEntity {
    const TYPE: &'static str = "AnomalyDetection";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use weldwatch_ngsi::encode_entity;

    #[test]
    fn test_labeled_estimate_encodes_to_exact_wire_object() {
        let estimate = AnomalyDetectionEntity::from_score("urn:ngsi-ld:Machine:1", 2.3);

        let encoded = encode_entity(&estimate).unwrap();

        assert_eq!(
            encoded,
            json!({
                "id": "urn:ngsi-ld:Machine:1",
                "type": "AnomalyDetection",
                "Label": {"type": "Number", "value": 2.3}
            })
        );
        let keys: Vec<&str> = encoded
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["id", "type", "Label"]);
    }

    #[test]
    fn test_unlabeled_estimate_omits_the_label_key() {
        let estimate = AnomalyDetectionEntity::with_local_id("1").unwrap();

        let encoded = encode_entity(&estimate).unwrap();

        assert_eq!(
            encoded,
            json!({"id": "urn:ngsi-ld:AnomalyDetection:1", "type": "AnomalyDetection"})
        );
    }
}
