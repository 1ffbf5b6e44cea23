use async_trait::async_trait;

use crate::capture::domain::model::{
    commands::capture_request_command::CaptureRequestCommand,
    entities::captured_record::CapturedRecord,
    enums::capture_domain_error::CaptureDomainError,
};

#[async_trait]
pub trait RequestCaptureCommandService: Send + Sync {
    async fn handle_capture(
        &self,
        command: CaptureRequestCommand,
    ) -> Result<CapturedRecord, CaptureDomainError>;
}
