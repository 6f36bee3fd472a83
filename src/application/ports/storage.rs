// src/application/ports/storage.rs
use crate::application::ApplicationResult;
use crate::domain::catalog::{FileName, ResourceId, ResourceKind};
use async_trait::async_trait;

/// Directory-per-resource file storage for uploaded images.
///
/// Every operation is scoped to the directory of one resource of one kind.
/// Calls are blocking from the caller's point of view and may be retried.
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Create the resource directory if it does not exist yet.
    async fn ensure(&self, kind: ResourceKind, owner: ResourceId) -> ApplicationResult<()>;

    /// Delete every file in the resource directory, keeping the directory.
    async fn empty(&self, kind: ResourceKind, owner: ResourceId) -> ApplicationResult<()>;

    /// Delete the resource directory and its contents. Missing directories are fine.
    async fn remove(&self, kind: ResourceKind, owner: ResourceId) -> ApplicationResult<()>;

    /// Delete one file from the resource directory. Missing files are fine.
    async fn remove_file(
        &self,
        kind: ResourceKind,
        owner: ResourceId,
        filename: &str,
    ) -> ApplicationResult<()>;

    /// Open a sink that writes `filename` into the resource directory.
    async fn begin_upload(
        &self,
        kind: ResourceKind,
        owner: ResourceId,
        filename: &FileName,
    ) -> ApplicationResult<Box<dyn UploadSink>>;
}

/// Destination of one streamed upload.
///
/// Nothing becomes visible under the final name until [`UploadSink::commit`]
/// succeeds; dropping an uncommitted sink discards whatever was written.
#[async_trait]
pub trait UploadSink: Send {
    async fn write_chunk(&mut self, chunk: &[u8]) -> ApplicationResult<()>;

    /// Flush and move the file into place, returning its size in bytes.
    async fn commit(&mut self) -> ApplicationResult<u64>;
}
