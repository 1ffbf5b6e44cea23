use std::net::IpAddr;

use honeypot_portal::geolocation::{
    domain::model::enums::geo_location_domain_error::GeoLocationDomainError,
    infrastructure::persistence::repositories::{
        file::json_geo_range_repository_impl::JsonGeoRangeRepositoryImpl,
        geo_range_repository::GeoRangeRepository,
    },
};

use crate::support::{SAMPLE_DATASET, sample_repository};

fn address(value: &str) -> IpAddr {
    value.parse().expect("valid address")
}

#[tokio::test]
async fn from_json_loads_every_entry_including_bare_addresses() {
    let repository = sample_repository();

    assert_eq!(repository.len(), 5);

    let entry = repository
        .find_by_address(&address("45.155.205.7"))
        .await
        .expect("lookup succeeds")
        .expect("entry exists");
    assert_eq!(entry.network().prefix_len(), 32);
    assert_eq!(entry.location().city(), "Amsterdam");

    let miss = repository
        .find_by_address(&address("45.155.205.8"))
        .await
        .expect("lookup succeeds");
    assert!(miss.is_none());
}

#[test]
fn from_json_rejects_malformed_networks() {
    let result = JsonGeoRangeRepositoryImpl::from_json(r#"[{ "network": "10.0.0.0/99" }]"#);

    assert!(matches!(
        result,
        Err(GeoLocationDomainError::InvalidDataset(message)) if message.contains("10.0.0.0/99")
    ));
}

#[test]
fn from_json_rejects_non_array_documents() {
    let result = JsonGeoRangeRepositoryImpl::from_json(r#"{ "network": "8.8.8.0/24" }"#);

    assert!(matches!(
        result,
        Err(GeoLocationDomainError::InvalidDataset(_))
    ));
}

#[test]
fn from_path_reports_missing_files() {
    let directory = tempfile::tempdir().expect("temp dir");
    let path = directory.path().join("missing.json");

    let result = JsonGeoRangeRepositoryImpl::from_path(&path);

    assert!(matches!(
        result,
        Err(GeoLocationDomainError::DatasetUnavailable(_))
    ));
}

#[tokio::test]
async fn from_path_reads_dataset_files() {
    let directory = tempfile::tempdir().expect("temp dir");
    let path = directory.path().join("ranges.json");
    std::fs::write(&path, SAMPLE_DATASET).expect("dataset written");

    let repository = JsonGeoRangeRepositoryImpl::from_path(&path).expect("dataset loads");

    let entry = repository
        .find_by_address(&address("2a0b:f4c0:1::9"))
        .await
        .expect("lookup succeeds")
        .expect("entry exists");
    assert_eq!(entry.location().country(), "DE");
}

#[tokio::test]
async fn find_by_address_prefers_longest_prefix_across_tables() {
    let repository = JsonGeoRangeRepositoryImpl::from_json(
        r#"[
          { "network": "10.0.0.0/8", "country": "AA" },
          { "network": "10.1.0.0/16", "country": "BB" },
          { "network": "10.1.2.0/24", "country": "CC" },
          { "network": "10.1.2.3", "country": "DD" }
        ]"#,
    )
    .expect("valid dataset");

    let cases = [
        ("10.1.2.3", "DD"),
        ("10.1.2.4", "CC"),
        ("10.1.3.1", "BB"),
        ("10.200.0.1", "AA"),
    ];
    for (value, country) in cases {
        let entry = repository
            .find_by_address(&address(value))
            .await
            .expect("lookup succeeds")
            .expect("entry exists");
        assert_eq!(entry.location().country(), country, "address {value}");
    }
}

#[tokio::test]
async fn from_json_keeps_first_entry_for_duplicate_networks() {
    let repository = JsonGeoRangeRepositoryImpl::from_json(
        r#"[
          { "network": "192.0.2.0/24", "country": "FR" },
          { "network": "192.0.2.128/24", "country": "IT" }
        ]"#,
    )
    .expect("valid dataset");

    assert_eq!(repository.len(), 1);
    let entry = repository
        .find_by_address(&address("192.0.2.200"))
        .await
        .expect("lookup succeeds")
        .expect("entry exists");
    assert_eq!(entry.location().country(), "FR");
}

#[tokio::test]
async fn find_by_address_scales_to_large_tables() {
    let entries: Vec<String> = (0..=255u32)
        .flat_map(|second| {
            (0..=255u32).map(move |third| {
                format!(
                    r#"{{ "network": "100.{second}.{third}.0/24", "country": "C{second}", "city": "{third}" }}"#
                )
            })
        })
        .collect();
    let repository = JsonGeoRangeRepositoryImpl::from_json(&format!("[{}]", entries.join(",")))
        .expect("valid dataset");

    assert_eq!(repository.len(), 65_536);
    let entry = repository
        .find_by_address(&address("100.171.42.9"))
        .await
        .expect("lookup succeeds")
        .expect("entry exists");
    assert_eq!(entry.location().country(), "C171");
    assert_eq!(entry.location().city(), "42");
    assert!(
        repository
            .find_by_address(&address("2001:db8::1"))
            .await
            .expect("lookup succeeds")
            .is_none()
    );
}
