use thiserror::Error;

#[derive(Debug, Error)]
pub enum BaitPageDomainError {
    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
