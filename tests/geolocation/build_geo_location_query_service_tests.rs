use std::path::PathBuf;

use honeypot_portal::{
    config::app_config::AppConfig,
    geolocation::{build_geo_location_query_service, embedded_geo_dataset},
};

use crate::support::{SAMPLE_DATASET, resolve};

fn config_with_dataset(path: PathBuf) -> AppConfig {
    AppConfig {
        geo_dataset_path: Some(path),
        ..AppConfig::default()
    }
}

#[test]
fn embedded_dataset_parses() {
    let repository = embedded_geo_dataset().expect("embedded dataset is valid");

    assert!(!repository.is_empty());
}

#[tokio::test]
async fn build_without_dataset_path_uses_embedded_dataset() {
    let service = build_geo_location_query_service(&AppConfig::default());

    let location = resolve(service.as_ref(), "77.88.8.8").await;

    assert_eq!(location.country(), "RU");
    assert_eq!(location.city(), "Moscow");
}

#[tokio::test]
async fn build_with_operator_dataset_uses_it() {
    let directory = tempfile::tempdir().expect("temp dir");
    let path = directory.path().join("ranges.json");
    std::fs::write(&path, SAMPLE_DATASET).expect("dataset written");

    let service = build_geo_location_query_service(&config_with_dataset(path));

    let location = resolve(service.as_ref(), "45.155.205.7").await;
    assert_eq!(location.city(), "Amsterdam");
}

#[tokio::test]
async fn build_with_missing_dataset_falls_back_to_embedded() {
    let directory = tempfile::tempdir().expect("temp dir");

    let service =
        build_geo_location_query_service(&config_with_dataset(directory.path().join("gone.json")));

    let location = resolve(service.as_ref(), "8.8.8.8").await;
    assert_eq!(location.city(), "Mountain View");
}

#[tokio::test]
async fn build_with_malformed_dataset_falls_back_to_embedded() {
    let directory = tempfile::tempdir().expect("temp dir");
    let json_path = directory.path().join("broken.json");
    let mmdb_path = directory.path().join("broken.mmdb");
    std::fs::write(&json_path, "[{ \"network\": ").expect("dataset written");
    std::fs::write(&mmdb_path, b"not a maxmind database").expect("database written");

    for path in [json_path, mmdb_path] {
        let service = build_geo_location_query_service(&config_with_dataset(path));

        let location = resolve(service.as_ref(), "8.8.8.8").await;
        assert_eq!(location.country(), "US");
    }
}
