use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("assessment incomplete: missing {0}")]
    IncompleteAssessment(&'static str),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
