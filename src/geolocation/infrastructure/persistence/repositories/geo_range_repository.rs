use std::net::IpAddr;

use async_trait::async_trait;

use crate::geolocation::domain::model::{
    entities::geo_range_entry::GeoRangeEntry,
    enums::geo_location_domain_error::GeoLocationDomainError,
};

#[async_trait]
pub trait GeoRangeRepository: Send + Sync {
    async fn find_by_address(
        &self,
        address: &IpAddr,
    ) -> Result<Option<GeoRangeEntry>, GeoLocationDomainError>;
}
