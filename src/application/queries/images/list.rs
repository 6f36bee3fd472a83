// src/application/queries/images/list.rs
use super::ImageQueryService;
use crate::{
    application::{dto::ImageView, error::ApplicationResult},
    domain::catalog::ResourceId,
};

pub struct ListImagesQuery {
    pub owner: String,
}

impl ImageQueryService {
    /// Gallery of the owner sorted by position. A missing owner has an empty
    /// gallery.
    pub async fn list_images(&self, query: ListImagesQuery) -> ApplicationResult<Vec<ImageView>> {
        let owner = ResourceId::parse(&query.owner)?;
        let mut images = self.images.list(owner).await?;
        images.sort_by_key(|image| image.position);

        Ok(images
            .iter()
            .map(|image| ImageView::present(owner, image, &self.links))
            .collect())
    }
}
