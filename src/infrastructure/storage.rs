// src/infrastructure/storage.rs
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::{ImageStorage, UploadSink},
};
use crate::domain::catalog::{FileName, ResourceId, ResourceKind};

/// Uploads kept on the local filesystem as `<root>/<resource id>/<file>`.
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    brands_root: PathBuf,
    stores_root: PathBuf,
}

impl LocalImageStorage {
    pub fn new(brands_root: impl Into<PathBuf>, stores_root: impl Into<PathBuf>) -> Self {
        Self {
            brands_root: brands_root.into(),
            stores_root: stores_root.into(),
        }
    }

    pub fn directory(&self, kind: ResourceKind, owner: ResourceId) -> PathBuf {
        let root = match kind {
            ResourceKind::Brand => &self.brands_root,
            ResourceKind::Store => &self.stores_root,
        };
        root.join(owner.to_string())
    }
}

fn io_error(action: &str, path: &Path, err: &std::io::Error) -> ApplicationError {
    ApplicationError::infrastructure(format!("failed to {action} {}: {err}", path.display()))
}

fn ignore_missing(result: std::io::Result<()>) -> std::io::Result<()> {
    match result {
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn ensure(&self, kind: ResourceKind, owner: ResourceId) -> ApplicationResult<()> {
        let dir = self.directory(kind, owner);
        fs::create_dir_all(&dir)
            .await
            .map_err(|err| io_error("create", &dir, &err))
    }

    async fn empty(&self, kind: ResourceKind, owner: ResourceId) -> ApplicationResult<()> {
        let dir = self.directory(kind, owner);
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return self.ensure(kind, owner).await;
            }
            Err(err) => return Err(io_error("read", &dir, &err)),
        };

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|err| io_error("read", &dir, &err))?
        {
            let path = entry.path();
            let is_dir = entry
                .file_type()
                .await
                .map_err(|err| io_error("inspect", &path, &err))?
                .is_dir();
            let removed = if is_dir {
                fs::remove_dir_all(&path).await
            } else {
                fs::remove_file(&path).await
            };
            ignore_missing(removed).map_err(|err| io_error("remove", &path, &err))?;
        }

        Ok(())
    }

    async fn remove(&self, kind: ResourceKind, owner: ResourceId) -> ApplicationResult<()> {
        let dir = self.directory(kind, owner);
        ignore_missing(fs::remove_dir_all(&dir).await).map_err(|err| io_error("remove", &dir, &err))
    }

    async fn remove_file(
        &self,
        kind: ResourceKind,
        owner: ResourceId,
        filename: &str,
    ) -> ApplicationResult<()> {
        // Stored names come from the database; never follow anything but a
        // plain component.
        let Some(name) = Path::new(filename).file_name() else {
            return Ok(());
        };
        let path = self.directory(kind, owner).join(name);
        ignore_missing(fs::remove_file(&path).await).map_err(|err| io_error("remove", &path, &err))
    }

    async fn begin_upload(
        &self,
        kind: ResourceKind,
        owner: ResourceId,
        filename: &FileName,
    ) -> ApplicationResult<Box<dyn UploadSink>> {
        let dir = self.directory(kind, owner);
        let target = dir.join(filename.as_str());
        let temp = dir.join(format!(".{}.{}.part", filename, uuid::Uuid::new_v4().simple()));

        let file = File::create(&temp)
            .await
            .map_err(|err| io_error("create", &temp, &err))?;

        Ok(Box::new(LocalUploadSink {
            file: Some(file),
            temp,
            target,
            committed: false,
        }))
    }
}

/// Writes into a hidden temporary file and renames it on commit.
struct LocalUploadSink {
    file: Option<File>,
    temp: PathBuf,
    target: PathBuf,
    committed: bool,
}

#[async_trait]
impl UploadSink for LocalUploadSink {
    async fn write_chunk(&mut self, chunk: &[u8]) -> ApplicationResult<()> {
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| ApplicationError::infrastructure("upload already committed"))?;
        file.write_all(chunk)
            .await
            .map_err(|err| io_error("write", &self.temp, &err))
    }

    async fn commit(&mut self) -> ApplicationResult<u64> {
        let mut file = self
            .file
            .take()
            .ok_or_else(|| ApplicationError::infrastructure("upload already committed"))?;
        file.flush()
            .await
            .map_err(|err| io_error("flush", &self.temp, &err))?;
        file.sync_all()
            .await
            .map_err(|err| io_error("sync", &self.temp, &err))?;
        drop(file);

        fs::rename(&self.temp, &self.target)
            .await
            .map_err(|err| io_error("move", &self.target, &err))?;
        self.committed = true;

        let metadata = fs::metadata(&self.target)
            .await
            .map_err(|err| io_error("inspect", &self.target, &err))?;
        Ok(metadata.len())
    }
}

impl Drop for LocalUploadSink {
    fn drop(&mut self) {
        if !self.committed {
            drop(self.file.take());
            match std::fs::remove_file(&self.temp) {
                Err(err) if err.kind() != ErrorKind::NotFound => {
                    tracing::warn!(path = %self.temp.display(), error = %err, "failed to discard partial upload");
                }
                _ => {}
            }
        }
    }
}
