// src/domain/catalog/entity.rs
use crate::domain::catalog::value_objects::{Position, ResourceId, ResourceSlug, SiteUrl};
use chrono::{DateTime, Utc};

/// A brand or store as persisted.
#[derive(Debug, Clone)]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    pub description: String,
    pub meta_description: String,
    pub meta_title: String,
    pub enabled: bool,
    pub sort: String,
    pub position: Position,
    pub slug: Option<ResourceSlug>,
    pub image: String,
    pub site_url: Option<SiteUrl>,
    pub date_created: DateTime<Utc>,
    pub date_updated: Option<DateTime<Utc>>,
}

impl Resource {
    /// A draft has no slug and therefore no public address.
    pub fn is_draft(&self) -> bool {
        self.slug.is_none()
    }

    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}

/// Fully normalized insert document. Position and slug are already resolved.
#[derive(Debug, Clone)]
pub struct NewResource {
    pub name: String,
    pub description: String,
    pub meta_description: String,
    pub meta_title: String,
    pub enabled: bool,
    pub sort: String,
    pub position: Position,
    pub slug: Option<ResourceSlug>,
    pub image: String,
    pub site_url: Option<SiteUrl>,
    pub date_created: DateTime<Utc>,
}

/// Partial update. `None` leaves a column untouched; the nested options on
/// `slug` and `site_url` distinguish "clear" from "keep".
#[derive(Debug, Clone)]
pub struct ResourcePatch {
    pub id: ResourceId,
    pub name: Option<String>,
    pub description: Option<String>,
    pub meta_description: Option<String>,
    pub meta_title: Option<String>,
    pub enabled: Option<bool>,
    pub sort: Option<String>,
    pub position: Option<Position>,
    pub slug: Option<Option<ResourceSlug>>,
    pub image: Option<String>,
    pub site_url: Option<Option<SiteUrl>>,
    pub date_updated: DateTime<Utc>,
}

impl ResourcePatch {
    pub fn new(id: ResourceId, date_updated: DateTime<Utc>) -> Self {
        Self {
            id,
            name: None,
            description: None,
            meta_description: None,
            meta_title: None,
            enabled: None,
            sort: None,
            position: None,
            slug: None,
            image: None,
            site_url: None,
            date_updated,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Apply the patch to an in-memory copy, mirroring what the store does.
    pub fn apply_to(&self, resource: &mut Resource) {
        if let Some(name) = &self.name {
            resource.name.clone_from(name);
        }
        if let Some(description) = &self.description {
            resource.description.clone_from(description);
        }
        if let Some(meta_description) = &self.meta_description {
            resource.meta_description.clone_from(meta_description);
        }
        if let Some(meta_title) = &self.meta_title {
            resource.meta_title.clone_from(meta_title);
        }
        if let Some(enabled) = self.enabled {
            resource.enabled = enabled;
        }
        if let Some(sort) = &self.sort {
            resource.sort.clone_from(sort);
        }
        if let Some(position) = self.position {
            resource.position = position;
        }
        if let Some(slug) = &self.slug {
            resource.slug.clone_from(slug);
        }
        if let Some(image) = &self.image {
            resource.image.clone_from(image);
        }
        if let Some(site_url) = &self.site_url {
            resource.site_url.clone_from(site_url);
        }
        resource.date_updated = Some(self.date_updated);
    }
}

/// Listing filter. Results are always ordered by position, then creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceFilter {
    pub enabled: Option<bool>,
    pub id: Option<ResourceId>,
}
