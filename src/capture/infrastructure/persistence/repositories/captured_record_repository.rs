use async_trait::async_trait;

use crate::capture::domain::model::{
    entities::captured_record::CapturedRecord, enums::capture_domain_error::CaptureDomainError,
};

#[async_trait]
pub trait CapturedRecordRepository: Send + Sync {
    async fn append(&self, record: &CapturedRecord) -> Result<(), CaptureDomainError>;
}
