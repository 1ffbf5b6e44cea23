use std::sync::Arc;

use axum::Router;
use tracing::warn;

use crate::{
    bait_pages::build_bait_page_query_service,
    capture::{
        application::{
            acl::geo_location_facade_impl::GeoLocationFacadeImpl,
            command_services::request_capture_command_service_impl::RequestCaptureCommandServiceImpl,
        },
        domain::model::enums::login_response_mode::LoginResponseMode,
        infrastructure::persistence::repositories::{
            captured_record_repository::CapturedRecordRepository,
            file::{
                csv_captured_record_repository_impl::CsvCapturedRecordRepositoryImpl,
                json_block_captured_record_repository_impl::JsonBlockCapturedRecordRepositoryImpl,
            },
        },
        interfaces::rest::controllers::honeypot_rest_controller::{
            HoneypotRestControllerState, router,
        },
    },
    config::app_config::AppConfig,
    geolocation::build_geo_location_query_service,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_capture_router(config: &AppConfig) -> Result<Router, String> {
    let geo_location_facade = Arc::new(GeoLocationFacadeImpl::new(
        build_geo_location_query_service(config),
    ));

    let primary_log_repository = Arc::new(
        JsonBlockCapturedRecordRepositoryImpl::new(config.log_path.clone())
            .await
            .map_err(|e| e.to_string())?,
    );

    let tabular_log_repository: Option<Arc<dyn CapturedRecordRepository>> = if config.csv_enabled
    {
        Some(Arc::new(
            CsvCapturedRecordRepositoryImpl::new(config.csv_path.clone())
                .await
                .map_err(|e| e.to_string())?,
        ))
    } else {
        None
    };

    let capture_service = Arc::new(RequestCaptureCommandServiceImpl::new(
        geo_location_facade,
        primary_log_repository,
        tabular_log_repository,
    ));

    let login_response = config
        .login_response
        .parse::<LoginResponseMode>()
        .unwrap_or_else(|error| {
            warn!(%error, "using the default login response");
            LoginResponseMode::default()
        });

    Ok(router(HoneypotRestControllerState {
        capture_service,
        bait_page_service: build_bait_page_query_service(config),
        login_response,
    }))
}
