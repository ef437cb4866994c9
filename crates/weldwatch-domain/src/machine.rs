use serde::{Deserialize, Serialize};
use weldwatch_ngsi::{NgsiEntity, NgsiResult, NumberAttr, TextAttr};

/// Welding-cell machine entity: one shop-floor sample as the broker
/// stores it. Attribute names follow the collector's wire labels.
/// Every slot is optional since cells report whatever their sensors
/// produced this cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachineEntity {
    pub id: String,
    #[serde(rename = "type")]
    tag: MachineTag,
    #[serde(rename = "Barcode", default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<TextAttr>,
    #[serde(rename = "Face", default, skip_serializing_if = "Option::is_none")]
    pub face: Option<TextAttr>,
    #[serde(rename = "Cell", default, skip_serializing_if = "Option::is_none")]
    pub cell: Option<TextAttr>,
    #[serde(rename = "Point", default, skip_serializing_if = "Option::is_none")]
    pub point: Option<TextAttr>,
    #[serde(rename = "Group", default, skip_serializing_if = "Option::is_none")]
    pub group: Option<TextAttr>,
    #[serde(rename = "Joules", default, skip_serializing_if = "Option::is_none")]
    pub joules: Option<NumberAttr>,
    #[serde(rename = "Charge", default, skip_serializing_if = "Option::is_none")]
    pub charge: Option<NumberAttr>,
    #[serde(rename = "Residue", default, skip_serializing_if = "Option::is_none")]
    pub residue: Option<NumberAttr>,
    #[serde(rename = "Force_N", default, skip_serializing_if = "Option::is_none")]
    pub force_n: Option<NumberAttr>,
    #[serde(rename = "Force_N_1", default, skip_serializing_if = "Option::is_none")]
    pub force_n_1: Option<NumberAttr>,
    #[serde(rename = "Datetime", default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<TextAttr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum MachineTag {
    Machine,
}

impl MachineEntity {
    /// Entity with an already-namespaced id and no attributes set.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: MachineTag::Machine,
            barcode: None,
            face: None,
            cell: None,
            point: None,
            group: None,
            joules: None,
            charge: None,
            residue: None,
            force_n: None,
            force_n_1: None,
            datetime: None,
        }
    }

    /// Entity with the namespaced id derived from `local_id`.
    pub fn with_local_id(local_id: &str) -> NgsiResult<Self> {
        Ok(Self::with_id(Self::type_prefixed_id(local_id)?))
    }
}

impl NgsiEntity for MachineEntity {
    const TYPE: &'static str = "Machine";

    fn id(&self) -> &str {
        &self.id
    }
}
