use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::warn;

use crate::capture::{
    domain::{
        model::{
            commands::capture_request_command::CaptureRequestCommand,
            entities::captured_record::CapturedRecord,
            enums::capture_domain_error::CaptureDomainError,
        },
        services::request_capture_command_service::RequestCaptureCommandService,
    },
    infrastructure::persistence::repositories::captured_record_repository::CapturedRecordRepository,
    interfaces::acl::geo_location_facade::GeoLocationFacade,
};

pub struct RequestCaptureCommandServiceImpl {
    geo_location_facade: Arc<dyn GeoLocationFacade>,
    primary_log_repository: Arc<dyn CapturedRecordRepository>,
    tabular_log_repository: Option<Arc<dyn CapturedRecordRepository>>,
}

impl RequestCaptureCommandServiceImpl {
    pub fn new(
        geo_location_facade: Arc<dyn GeoLocationFacade>,
        primary_log_repository: Arc<dyn CapturedRecordRepository>,
        tabular_log_repository: Option<Arc<dyn CapturedRecordRepository>>,
    ) -> Self {
        Self {
            geo_location_facade,
            primary_log_repository,
            tabular_log_repository,
        }
    }
}

#[async_trait]
impl RequestCaptureCommandService for RequestCaptureCommandServiceImpl {
    async fn handle_capture(
        &self,
        command: CaptureRequestCommand,
    ) -> Result<CapturedRecord, CaptureDomainError> {
        let location = self
            .geo_location_facade
            .locate(command.client().address())
            .await;

        let record = CapturedRecord::build(command, location, Utc::now());

        // The two appends are independent; a failed CSV append leaves the
        // primary log entry in place.
        self.primary_log_repository.append(&record).await?;
        if let Some(tabular_log_repository) = &self.tabular_log_repository {
            tabular_log_repository.append(&record).await?;
        }

        warn!(
            kind = record.kind().as_str(),
            ip = record.client().address(),
            port = record.client().port(),
            method = record.method(),
            path = record.path(),
            username = record.username(),
            country = record.location().country(),
            "attack logged"
        );

        Ok(record)
    }
}
