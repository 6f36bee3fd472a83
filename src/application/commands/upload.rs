// src/application/commands/upload.rs
use crate::{
    application::{
        error::ApplicationResult,
        ports::storage::{ImageStorage, UploadSink},
    },
    domain::catalog::{FileName, ResourceId, ResourceKind},
};

/// One file being streamed into a resource directory.
///
/// The context owns the storage sink. Dropping it before it is committed
/// discards the partial file.
pub struct UploadContext {
    kind: ResourceKind,
    owner: ResourceId,
    filename: FileName,
    sink: Box<dyn UploadSink>,
}

impl std::fmt::Debug for UploadContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadContext")
            .field("kind", &self.kind)
            .field("owner", &self.owner)
            .field("filename", &self.filename)
            .finish_non_exhaustive()
    }
}

/// A file that reached its final name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub owner: ResourceId,
    pub filename: FileName,
    pub size: u64,
}

impl UploadContext {
    pub(crate) async fn open(
        storage: &dyn ImageStorage,
        kind: ResourceKind,
        owner: ResourceId,
        filename: FileName,
    ) -> ApplicationResult<Self> {
        storage.ensure(kind, owner).await?;
        let sink = storage.begin_upload(kind, owner, &filename).await?;
        Ok(Self {
            kind,
            owner,
            filename,
            sink,
        })
    }

    pub fn owner(&self) -> ResourceId {
        self.owner
    }

    pub async fn write(&mut self, chunk: &[u8]) -> ApplicationResult<()> {
        if chunk.is_empty() {
            return Ok(());
        }
        self.sink.write_chunk(chunk).await?;
        Ok(())
    }

    pub(crate) async fn commit(mut self) -> ApplicationResult<StoredFile> {
        let size = self.sink.commit().await?;
        tracing::debug!(
            kind = %self.kind,
            owner = %self.owner,
            file = %self.filename,
            size,
            "upload committed"
        );
        Ok(StoredFile {
            owner: self.owner,
            filename: self.filename,
            size,
        })
    }
}
