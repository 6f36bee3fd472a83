// src/application/commands/images/delete.rs
use super::ImageCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::catalog::{ImageId, ResourceId},
};

impl ImageCommandService {
    /// Remove an image file and its record. Deleting an image that is already
    /// gone still succeeds.
    pub async fn delete_image(&self, owner: &str, image: &str) -> ApplicationResult<bool> {
        let owner = ResourceId::parse(owner)?;
        let image = ImageId::parse(image)?;

        if let Some(existing) = self.images.find(owner, image).await? {
            self.discard_file(owner, &existing.filename).await;
            self.images.pull(owner, image).await?;
            tracing::info!(kind = %self.kind, %owner, %image, "gallery image deleted");
        }

        Ok(true)
    }
}
