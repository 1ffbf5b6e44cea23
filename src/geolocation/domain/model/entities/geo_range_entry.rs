use ipnet::IpNet;

use crate::geolocation::domain::model::value_objects::geo_location::GeoLocation;

#[derive(Clone, Debug)]
pub struct GeoRangeEntry {
    network: IpNet,
    location: GeoLocation,
}

impl GeoRangeEntry {
    pub fn new(network: IpNet, location: GeoLocation) -> Self {
        Self { network, location }
    }

    pub fn network(&self) -> &IpNet {
        &self.network
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }
}
