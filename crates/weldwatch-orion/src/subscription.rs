use serde_json::{json, Value};

/// Subscription body matching every entity of `entity_type` and
/// notifying `callback_url` on change. The result is broker-defined
/// JSON, ready for [`OrionClient::subscribe`](crate::OrionClient::subscribe).
pub fn entity_type_subscription(entity_type: &str, callback_url: &str) -> Value {
    json!({
        "description": format!("Notify on {entity_type} changes"),
        "subject": {
            "entities": [{"idPattern": ".*", "type": entity_type}]
        },
        "notification": {
            "http": {"url": callback_url}
        }
    })
}
