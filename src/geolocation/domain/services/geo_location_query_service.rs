use async_trait::async_trait;

use crate::geolocation::domain::model::{
    queries::resolve_geo_location_query::ResolveGeoLocationQuery,
    value_objects::geo_location::GeoLocation,
};

#[async_trait]
pub trait GeoLocationQueryService: Send + Sync {
    async fn handle_resolve(&self, query: ResolveGeoLocationQuery) -> GeoLocation;
}
