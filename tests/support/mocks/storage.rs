// tests/support/mocks/storage.rs
use async_trait::async_trait;
use catalog_core::application::{
    error::{ApplicationError, ApplicationResult},
    ports::storage::{ImageStorage, UploadSink},
};
use catalog_core::domain::catalog::{FileName, ResourceId, ResourceKind};

/// Storage whose every operation fails, for best-effort cleanup paths.
#[derive(Clone, Default)]
pub struct FailingStorage;

fn broken() -> ApplicationError {
    ApplicationError::infrastructure("disk unavailable")
}

#[async_trait]
impl ImageStorage for FailingStorage {
    async fn ensure(&self, _kind: ResourceKind, _owner: ResourceId) -> ApplicationResult<()> {
        Err(broken())
    }

    async fn empty(&self, _kind: ResourceKind, _owner: ResourceId) -> ApplicationResult<()> {
        Err(broken())
    }

    async fn remove(&self, _kind: ResourceKind, _owner: ResourceId) -> ApplicationResult<()> {
        Err(broken())
    }

    async fn remove_file(
        &self,
        _kind: ResourceKind,
        _owner: ResourceId,
        _filename: &str,
    ) -> ApplicationResult<()> {
        Err(broken())
    }

    async fn begin_upload(
        &self,
        _kind: ResourceKind,
        _owner: ResourceId,
        _filename: &FileName,
    ) -> ApplicationResult<Box<dyn UploadSink>> {
        Err(broken())
    }
}
