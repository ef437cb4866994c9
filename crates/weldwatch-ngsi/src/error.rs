use thiserror::Error;

#[derive(Debug, Error)]
pub enum NgsiError {
    /// A wire record could not be encoded or decoded against the target
    /// schema: missing `id`/`type`, or an attribute whose declared kind
    /// disagrees with its raw value.
    #[error("malformed {entity_type} record: {source}")]
    Format {
        entity_type: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Identity construction was asked to namespace an empty local id.
    #[error("local id for a type-prefixed identifier must not be empty")]
    EmptyLocalId,
}

pub type NgsiResult<T> = std::result::Result<T, NgsiError>;
