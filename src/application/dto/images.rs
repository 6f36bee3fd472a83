// src/application/dto/images.rs
use crate::application::dto::links::PublicLinks;
use crate::domain::catalog::{ResourceId, ResourceImage};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ImageView {
    pub id: String,
    pub filename: String,
    pub alt: String,
    pub position: i64,
    pub url: String,
}

impl ImageView {
    pub fn present(owner: ResourceId, image: &ResourceImage, links: &PublicLinks) -> Self {
        Self {
            id: image.id.to_string(),
            filename: image.filename.clone(),
            alt: image.alt.clone(),
            position: image.position.value(),
            url: links.upload_url(owner, &image.filename),
        }
    }
}
