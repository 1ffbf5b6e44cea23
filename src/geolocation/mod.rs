use std::{path::Path, sync::Arc};

use tracing::{info, warn};

use crate::{
    config::app_config::AppConfig,
    geolocation::{
        application::query_services::geo_location_query_service_impl::GeoLocationQueryServiceImpl,
        domain::{
            model::enums::geo_location_domain_error::GeoLocationDomainError,
            services::geo_location_query_service::GeoLocationQueryService,
        },
        infrastructure::persistence::repositories::{
            file::{
                json_geo_range_repository_impl::JsonGeoRangeRepositoryImpl,
                maxmind_geo_range_repository_impl::{
                    MAXMIND_DATASET_EXTENSION, MaxMindGeoRangeRepositoryImpl,
                },
            },
            geo_range_repository::GeoRangeRepository,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;

const EMBEDDED_GEO_DATASET: &str = include_str!("../../data/geo_ranges.json");

pub fn build_geo_location_query_service(config: &AppConfig) -> Arc<dyn GeoLocationQueryService> {
    let repository = match config.geo_dataset_path.as_deref() {
        Some(path) => load_dataset(path).unwrap_or_else(|error| {
            warn!(%error, "falling back to the embedded geo dataset");
            embedded_repository()
        }),
        None => embedded_repository(),
    };

    Arc::new(GeoLocationQueryServiceImpl::new(repository))
}

fn load_dataset(path: &Path) -> Result<Arc<dyn GeoRangeRepository>, GeoLocationDomainError> {
    let is_maxmind = path
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case(MAXMIND_DATASET_EXTENSION));

    if is_maxmind {
        let repository = MaxMindGeoRangeRepositoryImpl::from_path(path)?;
        info!(
            path = %path.display(),
            database_type = repository.database_type(),
            "geo database loaded"
        );
        return Ok(Arc::new(repository));
    }

    let repository = JsonGeoRangeRepositoryImpl::from_path(path)?;
    info!(path = %path.display(), ranges = repository.len(), "geo dataset loaded");
    Ok(Arc::new(repository))
}

pub fn embedded_geo_dataset() -> Result<JsonGeoRangeRepositoryImpl, GeoLocationDomainError> {
    JsonGeoRangeRepositoryImpl::from_json(EMBEDDED_GEO_DATASET)
}

fn embedded_repository() -> Arc<dyn GeoRangeRepository> {
    let repository = embedded_geo_dataset().unwrap_or_else(|error| {
        warn!(%error, "embedded geo dataset is unusable; every lookup will be empty");
        JsonGeoRangeRepositoryImpl::empty()
    });
    info!(ranges = repository.len(), "embedded geo dataset loaded");

    Arc::new(repository)
}
