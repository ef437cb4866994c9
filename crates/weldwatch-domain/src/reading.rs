use serde::{Deserialize, Serialize};
use weldwatch_ngsi::{NumberAttr, TextAttr};

use crate::machine::MachineEntity;

/// One raw sample as pushed by the shop-floor collector. Every field
/// is optional; a cell reports whatever its sensors produced this
/// cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawReading {
    #[serde(rename = "Barcode", default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    #[serde(rename = "Face", default, skip_serializing_if = "Option::is_none")]
    pub face: Option<String>,
    #[serde(rename = "Cell", default, skip_serializing_if = "Option::is_none")]
    pub cell: Option<String>,
    #[serde(rename = "Point", default, skip_serializing_if = "Option::is_none")]
    pub point: Option<String>,
    #[serde(rename = "Group", default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(rename = "Joules", default, skip_serializing_if = "Option::is_none")]
    pub joules: Option<f64>,
    #[serde(rename = "Charge", default, skip_serializing_if = "Option::is_none")]
    pub charge: Option<f64>,
    #[serde(rename = "Residue", default, skip_serializing_if = "Option::is_none")]
    pub residue: Option<f64>,
    #[serde(rename = "Force_N", default, skip_serializing_if = "Option::is_none")]
    pub force_n: Option<f64>,
    #[serde(rename = "Force_N_1", default, skip_serializing_if = "Option::is_none")]
    pub force_n_1: Option<f64>,
    #[serde(rename = "Datetime", default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
}

impl RawReading {
    /// Lifts the reading into a machine entity under `entity_id`,
    /// consuming it. Absent fields stay unset on the entity; present
    /// zeroes become concrete attributes.
    pub fn into_machine_entity(self, entity_id: impl Into<String>) -> MachineEntity {
        let mut machine = MachineEntity::with_id(entity_id);
        machine.barcode = TextAttr::opt(self.barcode);
        machine.face = TextAttr::opt(self.face);
        machine.cell = TextAttr::opt(self.cell);
        machine.point = TextAttr::opt(self.point);
        machine.group = TextAttr::opt(self.group);
        machine.joules = NumberAttr::opt(self.joules);
        machine.charge = NumberAttr::opt(self.charge);
        machine.residue = NumberAttr::opt(self.residue);
        machine.force_n = NumberAttr::opt(self.force_n);
        machine.force_n_1 = NumberAttr::opt(self.force_n_1);
        machine.datetime = TextAttr::opt(self.datetime);
        machine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use weldwatch_ngsi::encode_entity;

    fn full_reading() -> RawReading {
        serde_json::from_value(json!({
            "Barcode": "ZLM001",
            "Face": "2nd",
            "Cell": "8th",
            "Point": "1st",
            "Group": "A+E1",
            "Joules": 4.5,
            "Charge": 100.5,
            "Residue": 98.24,
            "Force_N": 24.2,
            "Force_N_1": 23.5,
            "Datetime": "2020-06-08 00:00:00"
        }))
        .unwrap()
    }

    #[test]
    fn test_full_reading_lifts_to_fully_attributed_machine() {
        let machine = full_reading().into_machine_entity("urn:ngsi-ld:Machine:1");

        let encoded = encode_entity(&machine).unwrap();

        assert_eq!(
            encoded,
            json!({
                "id": "urn:ngsi-ld:Machine:1",
                "type": "Machine",
                "Barcode": {"type": "Text", "value": "ZLM001"},
                "Face": {"type": "Text", "value": "2nd"},
                "Cell": {"type": "Text", "value": "8th"},
                "Point": {"type": "Text", "value": "1st"},
                "Group": {"type": "Text", "value": "A+E1"},
                "Joules": {"type": "Number", "value": 4.5},
                "Charge": {"type": "Number", "value": 100.5},
                "Residue": {"type": "Number", "value": 98.24},
                "Force_N": {"type": "Number", "value": 24.2},
                "Force_N_1": {"type": "Number", "value": 23.5},
                "Datetime": {"type": "Text", "value": "2020-06-08 00:00:00"}
            })
        );
    }

    #[test]
    fn test_sparse_reading_lifts_only_present_fields() {
        let reading = RawReading {
            joules: Some(17.55),
            charge: Some(0.0),
            ..RawReading::default()
        };

        let machine = reading.into_machine_entity("urn:ngsi-ld:Machine:1");
        let encoded = encode_entity(&machine).unwrap();

        assert_eq!(
            encoded,
            json!({
                "id": "urn:ngsi-ld:Machine:1",
                "type": "Machine",
                "Joules": {"type": "Number", "value": 17.55},
                "Charge": {"type": "Number", "value": 0.0}
            })
        );
    }

    #[test]
    fn test_reading_deserializes_from_partial_collector_payload() {
        let reading: RawReading =
            serde_json::from_value(json!({"Joules": 10.0, "Barcode": "ZLM001"})).unwrap();

        assert_eq!(reading.joules, Some(10.0));
        assert_eq!(reading.barcode.as_deref(), Some("ZLM001"));
        assert_eq!(reading.datetime, None);
    }
}
