use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureDomainError {
    #[error("persistence error: {0}")]
    PersistenceError(String),
}
