use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    capture::{
        domain::model::value_objects::record_location::RecordLocation,
        interfaces::acl::geo_location_facade::GeoLocationFacade,
    },
    geolocation::domain::{
        model::queries::resolve_geo_location_query::ResolveGeoLocationQuery,
        services::geo_location_query_service::GeoLocationQueryService,
    },
};

pub struct GeoLocationFacadeImpl {
    query_service: Arc<dyn GeoLocationQueryService>,
}

impl GeoLocationFacadeImpl {
    pub fn new(query_service: Arc<dyn GeoLocationQueryService>) -> Self {
        Self { query_service }
    }
}

#[async_trait]
impl GeoLocationFacade for GeoLocationFacadeImpl {
    async fn locate(&self, address: &str) -> RecordLocation {
        let location = self
            .query_service
            .handle_resolve(ResolveGeoLocationQuery::new(address))
            .await;

        RecordLocation::new(location.country(), location.region(), location.city())
    }
}
