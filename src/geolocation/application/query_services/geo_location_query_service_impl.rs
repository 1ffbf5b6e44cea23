use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use async_trait::async_trait;
use ipnet::IpNet;
use tracing::debug;

use crate::geolocation::{
    domain::{
        model::{
            queries::resolve_geo_location_query::ResolveGeoLocationQuery,
            value_objects::geo_location::GeoLocation,
        },
        services::geo_location_query_service::GeoLocationQueryService,
    },
    infrastructure::persistence::repositories::geo_range_repository::GeoRangeRepository,
};

lazy_static::lazy_static! {
    static ref RESERVED_NETWORKS: Vec<IpNet> = [
        "0.0.0.0/8",
        "10.0.0.0/8",
        "100.64.0.0/10",
        "127.0.0.0/8",
        "169.254.0.0/16",
        "172.16.0.0/12",
        "192.0.0.0/24",
        "192.0.2.0/24",
        "192.88.99.0/24",
        "192.168.0.0/16",
        "198.18.0.0/15",
        "198.51.100.0/24",
        "203.0.113.0/24",
        "224.0.0.0/4",
        "240.0.0.0/4",
        "::/128",
        "::1/128",
        "64:ff9b::/96",
        "100::/64",
        "2001:db8::/32",
        "fc00::/7",
        "fe80::/10",
        "ff00::/8",
    ]
    .iter()
    .map(|network| network.parse().expect("valid reserved network"))
    .collect();
}

pub struct GeoLocationQueryServiceImpl {
    repository: Arc<dyn GeoRangeRepository>,
}

impl GeoLocationQueryServiceImpl {
    pub fn new(repository: Arc<dyn GeoRangeRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl GeoLocationQueryService for GeoLocationQueryServiceImpl {
    async fn handle_resolve(&self, query: ResolveGeoLocationQuery) -> GeoLocation {
        let Some(address) = parse_client_address(query.address()) else {
            return GeoLocation::unknown();
        };

        if is_reserved(&address) {
            return GeoLocation::unknown();
        }

        match self.repository.find_by_address(&address).await {
            Ok(Some(entry)) => entry.location().clone(),
            Ok(None) => GeoLocation::unknown(),
            Err(error) => {
                debug!(%error, %address, "geo lookup failed");
                GeoLocation::unknown()
            }
        }
    }
}

pub fn parse_client_address(raw: &str) -> Option<IpAddr> {
    let first_hop = raw.split(',').next()?.trim();
    if first_hop.is_empty() {
        return None;
    }

    let address = first_hop
        .parse::<IpAddr>()
        .ok()
        .or_else(|| first_hop.parse::<SocketAddr>().ok().map(|socket| socket.ip()))
        .or_else(|| {
            first_hop
                .strip_prefix('[')
                .and_then(|rest| rest.strip_suffix(']'))
                .and_then(|inner| inner.parse::<IpAddr>().ok())
        })?;

    Some(address.to_canonical())
}

fn is_reserved(address: &IpAddr) -> bool {
    RESERVED_NETWORKS
        .iter()
        .any(|network| network.contains(address))
}
