use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use crate::error::{OrionError, OrionResult};

/// Header names fixed by the FIWARE multi-tenancy convention.
pub const SERVICE_HEADER: &str = "fiware-service";
pub const SERVICE_PATH_HEADER: &str = "fiware-servicepath";
pub const CORRELATOR_HEADER: &str = "fiware-correlator";

/// Tenancy and correlation context attached to every broker call.
/// Values are opaque to the client; the broker interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiwareContext {
    pub service: String,
    pub service_path: String,
    pub correlator: String,
}

impl FiwareContext {
    pub fn new(
        service: impl Into<String>,
        service_path: impl Into<String>,
        correlator: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            service_path: service_path.into(),
            correlator: correlator.into(),
        }
    }

    /// Context with a freshly generated correlator, for calls that
    /// originate here rather than continuing an inbound request.
    pub fn with_generated_correlator(
        service: impl Into<String>,
        service_path: impl Into<String>,
    ) -> Self {
        Self::new(service, service_path, uuid::Uuid::new_v4().to_string())
    }

    /// Packs the context into request headers.
    pub fn headers(&self) -> OrionResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(SERVICE_HEADER, header_value(SERVICE_HEADER, &self.service)?);
        headers.insert(
            SERVICE_PATH_HEADER,
            header_value(SERVICE_PATH_HEADER, &self.service_path)?,
        );
        headers.insert(
            CORRELATOR_HEADER,
            header_value(CORRELATOR_HEADER, &self.correlator)?,
        );
        Ok(headers)
    }
}

fn header_value(name: &'static str, raw: &str) -> OrionResult<HeaderValue> {
    HeaderValue::from_str(raw).map_err(|source| OrionError::Header { name, source })
}
