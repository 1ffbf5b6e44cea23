use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::{
    fs::{File, OpenOptions},
    sync::Mutex,
};

use crate::{
    capture::{
        domain::model::{
            entities::captured_record::CapturedRecord,
            enums::capture_domain_error::CaptureDomainError,
        },
        infrastructure::persistence::repositories::captured_record_repository::CapturedRecordRepository,
    },
    shared::infrastructure::files::append_only_file::{
        append_bytes, create_parent_dir, open_append_file,
    },
};

pub const CSV_HEADER: &str =
    "timestamp,username,password,ip,port,browser,country,region,city,path,method";

pub struct CsvCapturedRecordRepositoryImpl {
    path: PathBuf,
    file: Mutex<File>,
}

impl CsvCapturedRecordRepositoryImpl {
    pub async fn new(path: PathBuf) -> Result<Self, CaptureDomainError> {
        create_parent_dir(&path)
            .await
            .map_err(|e| persistence_error(&path, e))?;

        // create_new decides which opener writes the header; anyone else
        // reopens the existing file in append mode.
        let mut file = match OpenOptions::new()
            .append(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(error) if error.kind() == ErrorKind::AlreadyExists => open_append_file(&path)
                .await
                .map_err(|e| persistence_error(&path, e))?,
            Err(error) => return Err(persistence_error(&path, error)),
        };

        ensure_header(&path, &mut file).await?;

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }
}

async fn ensure_header(path: &Path, file: &mut File) -> Result<(), CaptureDomainError> {
    let metadata = file
        .metadata()
        .await
        .map_err(|e| persistence_error(path, e))?;

    if metadata.len() > 0 {
        return Ok(());
    }

    append_bytes(file, format!("{CSV_HEADER}\n").as_bytes())
        .await
        .map_err(|e| persistence_error(path, e))
}

#[async_trait]
impl CapturedRecordRepository for CsvCapturedRecordRepositoryImpl {
    async fn append(&self, record: &CapturedRecord) -> Result<(), CaptureDomainError> {
        let row = format_csv_row(record);

        let mut file = self.file.lock().await;
        ensure_header(&self.path, &mut file).await?;
        append_bytes(&mut file, row.as_bytes())
            .await
            .map_err(|e| persistence_error(&self.path, e))
    }
}

pub fn format_csv_row(record: &CapturedRecord) -> String {
    let port = record.client().port().to_string();
    let fields = [
        record.timestamp(),
        record.username().to_string(),
        record.password().to_string(),
        record.client().address().to_string(),
        port,
        record.browser().to_string(),
        record.location().country().to_string(),
        record.location().region().to_string(),
        record.location().city().to_string(),
        record.path().to_string(),
        record.method().to_string(),
    ];

    let mut row = fields
        .iter()
        .map(|field| quote_csv_field(field))
        .collect::<Vec<_>>()
        .join(",");
    row.push('\n');
    row
}

pub fn quote_csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn persistence_error(path: &Path, error: std::io::Error) -> CaptureDomainError {
    CaptureDomainError::PersistenceError(format!("{}: {}", path.display(), error))
}
