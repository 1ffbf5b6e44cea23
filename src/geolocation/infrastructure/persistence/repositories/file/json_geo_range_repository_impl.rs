use std::{net::IpAddr, path::Path};

use async_trait::async_trait;
use ipnet::{IpNet, Ipv4Net, Ipv6Net};
use serde::Deserialize;

use crate::geolocation::{
    domain::model::{
        entities::geo_range_entry::GeoRangeEntry,
        enums::geo_location_domain_error::GeoLocationDomainError,
        value_objects::geo_location::GeoLocation,
    },
    infrastructure::persistence::repositories::geo_range_repository::GeoRangeRepository,
};

#[derive(Debug, Deserialize)]
struct GeoRangeDatasetEntryResource {
    network: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    region: String,
    #[serde(default)]
    city: String,
}

struct PrefixTable {
    prefix_len: u8,
    is_ipv4: bool,
    entries: Vec<GeoRangeEntry>,
}

impl PrefixTable {
    fn find(&self, address: &IpAddr) -> Option<&GeoRangeEntry> {
        if address.is_ipv4() != self.is_ipv4 {
            return None;
        }

        let network = IpNet::new(*address, self.prefix_len).ok()?.trunc();
        self.entries
            .binary_search_by(|entry| entry.network().cmp(&network))
            .ok()
            .map(|index| &self.entries[index])
    }
}

pub struct JsonGeoRangeRepositoryImpl {
    tables: Vec<PrefixTable>,
    len: usize,
}

impl JsonGeoRangeRepositoryImpl {
    pub fn empty() -> Self {
        Self::from_entries(Vec::new())
    }

    pub fn from_json(raw: &str) -> Result<Self, GeoLocationDomainError> {
        let resources: Vec<GeoRangeDatasetEntryResource> = serde_json::from_str(raw)
            .map_err(|e| GeoLocationDomainError::InvalidDataset(e.to_string()))?;

        let entries = resources
            .into_iter()
            .map(|resource| {
                let network = parse_network(&resource.network).ok_or_else(|| {
                    GeoLocationDomainError::InvalidDataset(format!(
                        "invalid network '{}'",
                        resource.network
                    ))
                })?;

                Ok(GeoRangeEntry::new(
                    network,
                    GeoLocation::new(resource.country, resource.region, resource.city),
                ))
            })
            .collect::<Result<Vec<_>, GeoLocationDomainError>>()?;

        Ok(Self::from_entries(entries))
    }

    pub fn from_path(path: &Path) -> Result<Self, GeoLocationDomainError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            GeoLocationDomainError::DatasetUnavailable(format!("{}: {}", path.display(), e))
        })?;

        Self::from_json(&raw)
    }

    // Entries are bucketed by family and prefix length, most specific first,
    // and sorted by network inside a bucket. Duplicate networks keep the
    // first occurrence.
    fn from_entries(entries: Vec<GeoRangeEntry>) -> Self {
        let mut tables: Vec<PrefixTable> = Vec::new();

        for entry in entries {
            let prefix_len = entry.network().prefix_len();
            let is_ipv4 = matches!(entry.network(), IpNet::V4(_));

            match tables
                .iter_mut()
                .find(|table| table.prefix_len == prefix_len && table.is_ipv4 == is_ipv4)
            {
                Some(table) => table.entries.push(entry),
                None => tables.push(PrefixTable {
                    prefix_len,
                    is_ipv4,
                    entries: vec![entry],
                }),
            }
        }

        for table in &mut tables {
            table
                .entries
                .sort_by(|a, b| a.network().cmp(b.network()));
            table
                .entries
                .dedup_by(|later, earlier| later.network() == earlier.network());
        }
        tables.sort_by(|a, b| b.prefix_len.cmp(&a.prefix_len));

        let len = tables.iter().map(|table| table.entries.len()).sum();

        Self { tables, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[async_trait]
impl GeoRangeRepository for JsonGeoRangeRepositoryImpl {
    async fn find_by_address(
        &self,
        address: &IpAddr,
    ) -> Result<Option<GeoRangeEntry>, GeoLocationDomainError> {
        Ok(self
            .tables
            .iter()
            .find_map(|table| table.find(address))
            .cloned())
    }
}

fn parse_network(value: &str) -> Option<IpNet> {
    let value = value.trim();
    if let Ok(network) = value.parse::<IpNet>() {
        return Some(network.trunc());
    }

    match value.parse::<IpAddr>().ok()? {
        IpAddr::V4(v4) => Ipv4Net::new(v4, 32).ok().map(IpNet::V4),
        IpAddr::V6(v6) => Ipv6Net::new(v6, 128).ok().map(IpNet::V6),
    }
}
