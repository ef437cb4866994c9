use async_trait::async_trait;
use reqwest::header::HeaderMap;
use serde_json::Value;
use url::Url;

use crate::error::{OrionError, OrionResult};

/// JSON-over-HTTP transport the client talks through. One call is one
/// request; retries, timeouts and cancellation belong to the
/// implementation's HTTP client configuration, not here.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait JsonTransport: Send + Sync {
    /// GET a JSON document.
    async fn get_json(&self, url: Url, headers: HeaderMap) -> OrionResult<Value>;

    /// POST a JSON body, discarding any response payload.
    async fn post_json(&self, url: Url, headers: HeaderMap, body: Value) -> OrionResult<()>;
}

/// Production transport backed by reqwest.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a caller-configured client (timeouts, proxies, TLS).
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    async fn into_checked(response: reqwest::Response) -> OrionResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        // Best effort: an unreadable error body still surfaces the status
        let body = response.text().await.unwrap_or_default();
        Err(OrionError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl JsonTransport for ReqwestTransport {
    async fn get_json(&self, url: Url, headers: HeaderMap) -> OrionResult<Value> {
        let response = self.http.get(url).headers(headers).send().await?;
        let response = Self::into_checked(response).await?;
        Ok(response.json().await?)
    }

    async fn post_json(&self, url: Url, headers: HeaderMap, body: Value) -> OrionResult<()> {
        let response = self
            .http
            .post(url)
            .headers(headers)
            .json(&body)
            .send()
            .await?;
        Self::into_checked(response).await?;
        Ok(())
    }
}
