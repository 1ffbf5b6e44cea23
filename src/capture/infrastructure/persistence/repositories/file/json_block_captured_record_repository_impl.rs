use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use serde::Serialize;
use tokio::{fs::File, sync::Mutex};

use crate::{
    capture::{
        domain::model::{
            entities::captured_record::CapturedRecord,
            enums::{capture_domain_error::CaptureDomainError, capture_kind::CaptureKind},
        },
        infrastructure::persistence::repositories::captured_record_repository::CapturedRecordRepository,
    },
    shared::infrastructure::files::append_only_file::{append_bytes, open_append_file},
};

#[derive(Serialize)]
struct CapturedRecordLogResource<'a> {
    timestamp: String,
    #[serde(flatten)]
    subject: CapturedSubjectLogResource<'a>,
    ip: &'a str,
    port: u16,
    headers: &'a BTreeMap<String, String>,
    browser: &'a str,
    location: RecordLocationLogResource<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum CapturedSubjectLogResource<'a> {
    Credentials { username: &'a str, password: &'a str },
    Request { path: &'a str, method: &'a str },
}

#[derive(Serialize)]
struct RecordLocationLogResource<'a> {
    country: &'a str,
    region: &'a str,
    city: &'a str,
}

impl<'a> From<&'a CapturedRecord> for CapturedRecordLogResource<'a> {
    fn from(record: &'a CapturedRecord) -> Self {
        let subject = match record.kind() {
            CaptureKind::LoginAttempt => CapturedSubjectLogResource::Credentials {
                username: record.username(),
                password: record.password(),
            },
            CaptureKind::Probe => CapturedSubjectLogResource::Request {
                path: record.path(),
                method: record.method(),
            },
        };

        Self {
            timestamp: record.timestamp(),
            subject,
            ip: record.client().address(),
            port: record.client().port(),
            headers: record.headers().as_map(),
            browser: record.browser(),
            location: RecordLocationLogResource {
                country: record.location().country(),
                region: record.location().region(),
                city: record.location().city(),
            },
        }
    }
}

pub struct JsonBlockCapturedRecordRepositoryImpl {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonBlockCapturedRecordRepositoryImpl {
    pub async fn new(path: PathBuf) -> Result<Self, CaptureDomainError> {
        let file = open_append_file(&path)
            .await
            .map_err(|e| persistence_error(&path, e))?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }
}

pub fn format_log_block(record: &CapturedRecord) -> Result<String, CaptureDomainError> {
    let mut block = serde_json::to_string_pretty(&CapturedRecordLogResource::from(record))
        .map_err(|e| CaptureDomainError::PersistenceError(e.to_string()))?;
    block.push_str("\n\n");
    Ok(block)
}

#[async_trait]
impl CapturedRecordRepository for JsonBlockCapturedRecordRepositoryImpl {
    async fn append(&self, record: &CapturedRecord) -> Result<(), CaptureDomainError> {
        let block = format_log_block(record)?;

        let mut file = self.file.lock().await;
        append_bytes(&mut file, block.as_bytes())
            .await
            .map_err(|e| persistence_error(&self.path, e))
    }
}

fn persistence_error(path: &Path, error: std::io::Error) -> CaptureDomainError {
    CaptureDomainError::PersistenceError(format!("{}: {}", path.display(), error))
}
