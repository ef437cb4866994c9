use std::collections::HashMap;

use serde_json::Value;
use weldwatch_ngsi::{decode_entity, NgsiEntity};

use crate::anomaly::AnomalyDetectionEntity;
use crate::error::DomainResult;
use crate::machine::MachineEntity;

/// A record decoded through the registry, tagged with its schema.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedEntity {
    Machine(MachineEntity),
    AnomalyDetection(AnomalyDetectionEntity),
}

type DecodeFn = fn(&Value) -> DomainResult<DecodedEntity>;

/// Describes one entity schema known to this deployment: its type tag
/// and the hook that decodes a raw record into the schema.
#[derive(Clone, Copy)]
pub struct SchemaDescriptor {
    pub entity_type: &'static str,
    decode: DecodeFn,
}

impl SchemaDescriptor {
    pub fn new(entity_type: &'static str, decode: DecodeFn) -> Self {
        Self {
            entity_type,
            decode,
        }
    }
}

/// Type-tag → schema lookup, resolved once at startup. Decode sites
/// route records through the registry instead of matching on type
/// strings inline.
pub struct SchemaRegistry {
    by_type: HashMap<&'static str, SchemaDescriptor>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self {
            by_type: HashMap::new(),
        }
    }

    /// Registry preloaded with every schema this system exchanges.
    pub fn with_known_schemas() -> Self {
        let mut registry = Self::new();
        registry.register(SchemaDescriptor::new(MachineEntity::TYPE, |record| {
            Ok(DecodedEntity::Machine(decode_entity(record)?))
        }));
        registry.register(SchemaDescriptor::new(AnomalyDetectionEntity::TYPE, |record| {
            Ok(DecodedEntity::AnomalyDetection(decode_entity(record)?))
        }));
        registry
    }

    pub fn register(&mut self, descriptor: SchemaDescriptor) {
        self.by_type.insert(descriptor.entity_type, descriptor);
    }

    pub fn contains(&self, entity_type: &str) -> bool {
        self.by_type.contains_key(entity_type)
    }

    /// Routes a raw record by its type tag. Records with no tag or an
    /// unregistered tag are `None`, mirroring notification-filter
    /// tolerance; a registered record that fails decode is an error.
    pub fn decode_record(&self, record: &Value) -> Option<DomainResult<DecodedEntity>> {
        let tag = record.get("type")?.as_str()?;
        let descriptor = self.by_type.get(tag)?;
        Some((descriptor.decode)(record))
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_schemas_are_registered() {
        let registry = SchemaRegistry::with_known_schemas();

        assert!(registry.contains("Machine"));
        assert!(registry.contains("AnomalyDetection"));
        assert!(!registry.contains("NotMe"));
    }

    #[test]
    fn test_routes_machine_records_to_the_machine_schema() {
        let registry = SchemaRegistry::with_known_schemas();
        let record = json!({"id": "1", "type": "Machine", "Joules": {"value": 1.1}});

        let decoded = registry.decode_record(&record).unwrap().unwrap();

        match decoded {
            DecodedEntity::Machine(machine) => assert_eq!(machine.id, "1"),
            other => panic!("expected a machine, got {other:?}"),
        }
    }

    #[test]
    fn test_unregistered_tags_are_tolerated() {
        let registry = SchemaRegistry::with_known_schemas();
        let record = json!({"id": "1", "type": "NotMe"});

        assert!(registry.decode_record(&record).is_none());
        assert!(registry.decode_record(&json!({"id": "1"})).is_none());
    }

    #[test]
    fn test_registered_record_that_fails_decode_is_an_error() {
        let registry = SchemaRegistry::with_known_schemas();
        let record = json!({"type": "Machine"});

        let got = registry.decode_record(&record).unwrap();

        assert!(got.is_err());
    }
}
