use std::{collections::BTreeMap, net::IpAddr, path::Path};

use async_trait::async_trait;
use ipnet::IpNet;
use maxminddb::{MaxMindDBError, Reader};
use serde::Deserialize;

use crate::geolocation::{
    domain::model::{
        entities::geo_range_entry::GeoRangeEntry,
        enums::geo_location_domain_error::GeoLocationDomainError,
        value_objects::geo_location::GeoLocation,
    },
    infrastructure::persistence::repositories::geo_range_repository::GeoRangeRepository,
};

pub const MAXMIND_DATASET_EXTENSION: &str = "mmdb";

#[derive(Debug, Default, Deserialize)]
struct MaxMindCityRecord {
    country: Option<MaxMindIsoCodeRecord>,
    subdivisions: Option<Vec<MaxMindIsoCodeRecord>>,
    city: Option<MaxMindNamesRecord>,
}

#[derive(Debug, Deserialize)]
struct MaxMindIsoCodeRecord {
    iso_code: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MaxMindNamesRecord {
    names: Option<BTreeMap<String, String>>,
}

impl From<MaxMindCityRecord> for GeoLocation {
    fn from(record: MaxMindCityRecord) -> Self {
        let country = record
            .country
            .and_then(|country| country.iso_code)
            .unwrap_or_default();
        let region = record
            .subdivisions
            .and_then(|subdivisions| subdivisions.into_iter().next())
            .and_then(|subdivision| subdivision.iso_code)
            .unwrap_or_default();
        let city = record
            .city
            .and_then(|city| city.names)
            .and_then(|mut names| names.remove("en"))
            .unwrap_or_default();

        GeoLocation::new(country, region, city)
    }
}

// GeoLite2 / GeoIP2 City or Country databases. Country databases simply
// leave region and city empty.
pub struct MaxMindGeoRangeRepositoryImpl {
    reader: Reader<Vec<u8>>,
}

impl MaxMindGeoRangeRepositoryImpl {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, GeoLocationDomainError> {
        let reader = Reader::from_source(bytes)
            .map_err(|e| GeoLocationDomainError::InvalidDataset(e.to_string()))?;

        Ok(Self { reader })
    }

    pub fn from_path(path: &Path) -> Result<Self, GeoLocationDomainError> {
        let bytes = std::fs::read(path).map_err(|e| {
            GeoLocationDomainError::DatasetUnavailable(format!("{}: {}", path.display(), e))
        })?;

        Self::from_bytes(bytes).map_err(|error| match error {
            GeoLocationDomainError::InvalidDataset(message) => {
                GeoLocationDomainError::InvalidDataset(format!("{}: {}", path.display(), message))
            }
            other => other,
        })
    }

    pub fn database_type(&self) -> &str {
        &self.reader.metadata.database_type
    }
}

#[async_trait]
impl GeoRangeRepository for MaxMindGeoRangeRepositoryImpl {
    async fn find_by_address(
        &self,
        address: &IpAddr,
    ) -> Result<Option<GeoRangeEntry>, GeoLocationDomainError> {
        match self.reader.lookup_prefix::<MaxMindCityRecord>(*address) {
            Ok((record, prefix_len)) => Ok(network_of(address, prefix_len)
                .map(|network| GeoRangeEntry::new(network, GeoLocation::from(record)))),
            Err(MaxMindDBError::AddressNotFoundError(_)) => Ok(None),
            Err(error) => Err(GeoLocationDomainError::InvalidDataset(error.to_string())),
        }
    }
}

fn network_of(address: &IpAddr, prefix_len: usize) -> Option<IpNet> {
    let host_len = if address.is_ipv4() { 32 } else { 128 };
    let prefix_len = u8::try_from(prefix_len)
        .ok()
        .filter(|prefix_len| *prefix_len <= host_len)
        .unwrap_or(host_len);

    IpNet::new(*address, prefix_len)
        .ok()
        .map(|network| network.trunc())
}
