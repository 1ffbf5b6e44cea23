use std::{
    io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use tokio::{fs::File, sync::Mutex};
use tracing::info;

use crate::shared::infrastructure::files::append_only_file::{append_bytes, open_append_file};

#[derive(Clone, Debug)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    pub time: DateTime<Utc>,
    pub method: String,
    pub uri: String,
    pub http_version: String,
    pub status: u16,
    pub content_length: Option<u64>,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
}

impl AccessLogEntry {
    pub fn to_combined_line(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} {}\" {} {} \"{}\" \"{}\"\n",
            self.remote_addr,
            self.time.format("%d/%b/%Y:%H:%M:%S +0000"),
            self.method,
            self.uri,
            self.http_version,
            self.status,
            self.content_length
                .map(|length| length.to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.referer.as_deref().unwrap_or("-"),
            self.user_agent.as_deref().unwrap_or("-"),
        )
    }
}

pub struct AccessLogWriter {
    path: PathBuf,
    file: Mutex<File>,
}

impl AccessLogWriter {
    pub async fn new(path: PathBuf) -> io::Result<Self> {
        let file = open_append_file(&path).await?;
        info!(path = %path.display(), "access log opened");

        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn write_entry(&self, entry: &AccessLogEntry) -> io::Result<()> {
        let line = entry.to_combined_line();
        let mut file = self.file.lock().await;
        append_bytes(&mut file, line.as_bytes()).await
    }
}
