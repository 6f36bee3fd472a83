// src/application/commands/images/update.rs
use super::ImageCommandService;
use crate::{
    application::{
        dto::{ImageView, UpdateImageInput},
        error::ApplicationResult,
    },
    domain::{
        catalog::{ImageId, ImagePatch, Position, ResourceId},
        errors::DomainError,
    },
};

impl ImageCommandService {
    /// Patch `alt` and/or `position` of one image. Returns `None` when the
    /// owner has no such image.
    pub async fn update_image(
        &self,
        owner: &str,
        image: &str,
        input: &UpdateImageInput,
    ) -> ApplicationResult<Option<ImageView>> {
        let owner = ResourceId::parse(owner)?;
        let image = ImageId::parse(image)?;

        let patch = build_image_patch(input);
        if patch.is_empty() {
            return Err(DomainError::EmptyUpdate.into());
        }

        if !self.images.update(owner, image, patch).await? {
            return Ok(None);
        }

        let updated = self.images.find(owner, image).await?;
        Ok(updated.map(|image| ImageView::present(owner, &image, &self.links)))
    }
}

/// Positions that are not positive integers are stored as 0.
fn build_image_patch(input: &UpdateImageInput) -> ImagePatch {
    ImagePatch {
        alt: input.alt.clone(),
        position: input
            .position
            .map(|position| Position::new(position.filter(|value| *value > 0).unwrap_or(0))),
    }
}
