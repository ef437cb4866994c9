use serde::{Deserialize, Serialize};

/// Connection settings for the Orion context broker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrionConfig {
    pub base_url: String,
    pub service: String,
    pub service_path: String,
}

impl Default for OrionConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:1026".to_string(),
            service: "".to_string(),
            service_path: "/".to_string(),
        }
    }
}
