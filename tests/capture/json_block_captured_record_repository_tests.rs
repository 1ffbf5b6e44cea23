use honeypot_portal::capture::infrastructure::persistence::repositories::{
    captured_record_repository::CapturedRecordRepository,
    file::json_block_captured_record_repository_impl::{
        JsonBlockCapturedRecordRepositoryImpl, format_log_block,
    },
};

use honeypot_portal::capture::domain::model::{
    entities::captured_record::CapturedRecord, value_objects::record_location::RecordLocation,
};

use crate::support::{login_command, probe_command, read_log_blocks, sample_record};

#[test]
fn format_log_block_orders_login_fields_and_ends_with_blank_line() {
    let block = format_log_block(&sample_record(login_command("admin", "1234")))
        .expect("block formats");

    assert!(block.starts_with("{\n  \"timestamp\": \"2024-05-01T12:00:00.000Z\",\n  \"username\": \"admin\",\n  \"password\": \"1234\",\n  \"ip\": \"203.0.113.7\",\n  \"port\": 52114,\n  \"headers\": {"));
    assert!(block.ends_with("}\n\n"));

    let keys: Vec<String> = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(&block)
        .expect("block is JSON")
        .keys()
        .cloned()
        .collect();
    assert!(keys.contains(&"browser".to_string()));
    assert!(keys.contains(&"location".to_string()));
    assert!(!keys.contains(&"path".to_string()));
}

#[test]
fn format_log_block_uses_path_and_method_for_probes() {
    let block = format_log_block(&sample_record(probe_command("GET", "/does-not-exist")))
        .expect("block formats");

    assert!(block.contains("\"timestamp\": \"2024-05-01T12:00:00.000Z\",\n  \"path\": \"/does-not-exist\",\n  \"method\": \"GET\",\n  \"ip\""));
    assert!(!block.contains("\"username\""));
}

#[test]
fn format_log_block_keeps_location_keys_when_unresolved() {
    let record = CapturedRecord::build(
        probe_command("GET", "/"),
        RecordLocation::unknown(),
        chrono::Utc::now(),
    );
    let block = format_log_block(&record).expect("block formats");
    let value: serde_json::Value = serde_json::from_str(&block).expect("block is JSON");

    assert_eq!(value["location"]["country"], "");
    assert_eq!(value["location"]["region"], "");
    assert_eq!(value["location"]["city"], "");
}

#[tokio::test]
async fn append_writes_one_block_per_record() {
    let directory = tempfile::tempdir().expect("temp dir");
    let path = directory.path().join("nested").join("honeypot.log");
    let repository = JsonBlockCapturedRecordRepositoryImpl::new(path.clone())
        .await
        .expect("repository opens");

    repository
        .append(&sample_record(login_command("admin", "1234")))
        .await
        .expect("append succeeds");
    repository
        .append(&sample_record(probe_command("GET", "/phpmyadmin")))
        .await
        .expect("append succeeds");

    let blocks = read_log_blocks(&path);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0]["username"], "admin");
    assert_eq!(blocks[0]["headers"]["host"], "bank.example");
    assert_eq!(blocks[0]["browser"], "Mozilla/5.0 (X11; Linux x86_64) sqlmap/1.7");
    assert_eq!(blocks[0]["location"]["country"], "US");
    assert_eq!(blocks[1]["path"], "/phpmyadmin");
    assert_eq!(blocks[1]["method"], "GET");
}

#[tokio::test]
async fn new_keeps_existing_log_content() {
    let directory = tempfile::tempdir().expect("temp dir");
    let path = directory.path().join("honeypot.log");
    let existing = format_log_block(&sample_record(probe_command("GET", "/old")))
        .expect("block formats");
    std::fs::write(&path, &existing).expect("seed log");

    let repository = JsonBlockCapturedRecordRepositoryImpl::new(path.clone())
        .await
        .expect("repository opens");
    repository
        .append(&sample_record(probe_command("GET", "/new")))
        .await
        .expect("append succeeds");

    let blocks = read_log_blocks(&path);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0]["path"], "/old");
    assert_eq!(blocks[1]["path"], "/new");
}
