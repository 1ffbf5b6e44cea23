use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoLocationDomainError {
    #[error("geo dataset unavailable: {0}")]
    DatasetUnavailable(String),

    #[error("geo dataset is invalid: {0}")]
    InvalidDataset(String),
}
