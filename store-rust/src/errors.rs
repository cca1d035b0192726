use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SAAM API error: {0}")]
    Api(#[from] saam_sdk::SaamError),
    #[error("Persistence error: {0}")]
    Persistence(String),
    #[error("Snapshot serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
