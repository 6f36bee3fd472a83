// src/application/dto/resources.rs
use crate::application::dto::links::PublicLinks;
use crate::domain::catalog::Resource;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::serde_time;

/// Outgoing representation of a brand or store.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ResourceView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub meta_description: String,
    pub meta_title: String,
    pub enabled: bool,
    pub sort: String,
    pub position: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Absolute storefront URL, present when the resource has a slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Site-relative path, present when the resource has a slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Absolute image URL, or an empty string when no image is set.
    pub image: String,
    pub site_url: Option<String>,
    #[serde(with = "serde_time")]
    pub date_created: DateTime<Utc>,
    #[serde(with = "serde_time::option")]
    pub date_updated: Option<DateTime<Utc>>,
}

impl ResourceView {
    /// Pure projection of a stored resource; the resource itself is untouched.
    pub fn present(resource: &Resource, links: &PublicLinks) -> Self {
        let url = resource.slug.as_ref().map(|slug| links.resource_url(slug));
        let path = resource.slug.as_ref().map(|slug| links.resource_path(slug));
        let image = if resource.has_image() {
            links.upload_url(resource.id, &resource.image)
        } else {
            String::new()
        };

        Self {
            id: resource.id.to_string(),
            name: resource.name.clone(),
            description: resource.description.clone(),
            meta_description: resource.meta_description.clone(),
            meta_title: resource.meta_title.clone(),
            enabled: resource.enabled,
            sort: resource.sort.clone(),
            position: resource.position.value(),
            slug: resource.slug.as_ref().map(ToString::to_string),
            url,
            path,
            image,
            site_url: resource.site_url.as_ref().map(ToString::to_string),
            date_created: resource.date_created,
            date_updated: resource.date_updated,
        }
    }
}

/// Result of a primary image upload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UploadedFileDto {
    pub file: String,
    pub size: u64,
}
