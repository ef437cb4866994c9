use thiserror::Error;
use weldwatch_ngsi::NgsiError;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("entity record: {0}")]
    Entity(#[from] NgsiError),

    #[error("scoring machine {machine_id}: {reason}")]
    Scoring { machine_id: String, reason: String },

    #[error("publishing estimates: {0}")]
    Publish(#[from] anyhow::Error),
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;
