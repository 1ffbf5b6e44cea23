use std::{io, path::Path};

use tokio::{
    fs::{File, OpenOptions},
    io::AsyncWriteExt,
};

pub async fn create_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    Ok(())
}

pub async fn open_append_file(path: &Path) -> io::Result<File> {
    create_parent_dir(path).await?;

    OpenOptions::new().create(true).append(true).open(path).await
}

// One write_all per call; the flush waits for tokio's blocking write to land.
pub async fn append_bytes(file: &mut File, bytes: &[u8]) -> io::Result<()> {
    file.write_all(bytes).await?;
    file.flush().await
}
