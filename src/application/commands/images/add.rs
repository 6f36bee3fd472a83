// src/application/commands/images/add.rs
use super::ImageCommandService;
use crate::{
    application::{
        commands::UploadContext,
        dto::ImageView,
        error::{ApplicationError, ApplicationResult},
    },
    domain::catalog::{FileName, NewResourceImage, ResourceId},
};

impl ImageCommandService {
    /// Open an upload for one gallery file of `owner`.
    pub async fn begin_image_upload(
        &self,
        owner: &str,
        original_name: &str,
    ) -> ApplicationResult<UploadContext> {
        let owner = ResourceId::parse(owner)?;
        self.require_owner(owner).await?;
        let filename = FileName::sanitize(original_name)?;
        UploadContext::open(self.storage.as_ref(), self.kind, owner, filename).await
    }

    /// Commit the file and append its record with an empty `alt` and the
    /// default gallery position.
    pub async fn add_image(&self, upload: UploadContext) -> ApplicationResult<ImageView> {
        let owner = upload.owner();
        let stored = upload.commit().await?;
        let record = NewResourceImage::uploaded(stored.filename);
        let image = record.clone().into_image();

        match self.images.push(owner, record).await {
            Ok(true) => {}
            Ok(false) => {
                self.discard_file(owner, &image.filename).await;
                return Err(ApplicationError::not_found(format!(
                    "{} {owner} not found",
                    self.kind
                )));
            }
            Err(err) => {
                self.discard_file(owner, &image.filename).await;
                return Err(err.into());
            }
        }

        tracing::info!(kind = %self.kind, %owner, image = %image.id, file = %image.filename, "gallery image added");
        Ok(ImageView::present(owner, &image, &self.links))
    }
}
