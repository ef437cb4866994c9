use thiserror::Error;
use weldwatch_ngsi::NgsiError;

#[derive(Debug, Error)]
pub enum OrionError {
    #[error("invalid orion base url: {0}")]
    BaseUrl(String),

    #[error("request context header {name}: {source}")]
    Header {
        name: &'static str,
        #[source]
        source: reqwest::header::InvalidHeaderValue,
    },

    /// Network-level failure before a response was obtained.
    #[error("transport failure talking to orion: {0}")]
    Transport(#[from] reqwest::Error),

    /// The broker answered outside the 2xx range. Carries the response
    /// body when one could be read.
    #[error("orion returned {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// A response payload that is not the JSON shape the operation
    /// expects (e.g. a listing that is not an array).
    #[error("unexpected orion payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("entity codec: {0}")]
    Entity(#[from] NgsiError),
}

pub type OrionResult<T> = std::result::Result<T, OrionError>;
