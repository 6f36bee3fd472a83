// src/application/commands/resources/primary_image.rs
use super::ResourceCommandService;
use crate::{
    application::{
        commands::UploadContext,
        dto::UploadedFileDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::catalog::{FileName, Resource, ResourceId, ResourcePatch},
};

impl ResourceCommandService {
    /// Open an upload for the primary image of `id`.
    ///
    /// Fails with not-found before any byte is written when the resource is
    /// missing.
    pub async fn begin_primary_image_upload(
        &self,
        id: &str,
        original_name: &str,
    ) -> ApplicationResult<UploadContext> {
        let id = ResourceId::parse(id)?;
        self.require(id).await?;
        let filename = FileName::sanitize(original_name)?;
        UploadContext::open(self.storage.as_ref(), self.kind, id, filename).await
    }

    /// Move the uploaded file into place and point `image` at it. The
    /// previous primary file is removed when it had a different name.
    pub async fn finish_primary_image_upload(
        &self,
        upload: UploadContext,
    ) -> ApplicationResult<UploadedFileDto> {
        let owner = upload.owner();
        let previous = self.require(owner).await?.image;
        let stored = upload.commit().await?;
        let file = stored.filename.into_inner();

        if !previous.is_empty() && previous != file {
            self.discard_file(owner, &previous).await;
        }

        let patch = ResourcePatch::new(owner, self.clock.now()).with_image(file.clone());
        if self.write_repo.update(patch).await?.is_none() {
            self.discard_file(owner, &file).await;
            return Err(self.missing(owner));
        }

        tracing::info!(kind = %self.kind, %owner, %file, size = stored.size, "primary image uploaded");
        Ok(UploadedFileDto {
            file,
            size: stored.size,
        })
    }

    /// Remove the primary image file and clear `image`. Returns `false` when
    /// the resource does not exist.
    ///
    /// Kinds without a gallery own their whole directory, so it is emptied;
    /// for the others only the primary file goes.
    pub async fn delete_primary_image(&self, id: &str) -> ApplicationResult<bool> {
        let id = ResourceId::parse(id)?;
        let Some(resource) = self.read_repo.find_by_id(id).await? else {
            return Ok(false);
        };

        if self.kind.has_gallery() {
            if resource.has_image() {
                self.discard_file(id, &resource.image).await;
            }
        } else if let Err(err) = self.storage.empty(self.kind, id).await {
            tracing::warn!(kind = %self.kind, %id, error = %err, "failed to empty upload directory");
        }

        let patch = ResourcePatch::new(id, self.clock.now()).with_image(String::new());
        Ok(self.write_repo.update(patch).await?.is_some())
    }

    async fn require(&self, id: ResourceId) -> ApplicationResult<Resource> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| self.missing(id))
    }

    fn missing(&self, id: ResourceId) -> ApplicationError {
        ApplicationError::not_found(format!("{} {id} not found", self.kind))
    }

    async fn discard_file(&self, owner: ResourceId, filename: &str) {
        if let Err(err) = self.storage.remove_file(self.kind, owner, filename).await {
            tracing::warn!(kind = %self.kind, %owner, file = filename, error = %err, "failed to remove image file");
        }
    }
}
