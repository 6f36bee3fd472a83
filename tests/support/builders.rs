// tests/support/builders.rs
use catalog_core::domain::catalog::{
    ImageId, Position, Resource, ResourceId, ResourceImage, ResourceSlug, SiteUrl,
};
use uuid::Uuid;

use super::mocks::fixed_now;

/// Builder for persisted resources used to seed the in-memory catalog.
pub struct ResourceBuilder {
    resource: Resource,
}

impl ResourceBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            resource: Resource {
                id: ResourceId::new(Uuid::new_v4()),
                name: name.to_string(),
                description: String::new(),
                meta_description: String::new(),
                meta_title: String::new(),
                enabled: true,
                sort: String::new(),
                position: Position::FIRST,
                slug: None,
                image: String::new(),
                site_url: None,
                date_created: fixed_now(),
                date_updated: None,
            },
        }
    }

    pub fn slug(mut self, slug: &str) -> Self {
        self.resource.slug = Some(ResourceSlug::new(slug).expect("valid slug"));
        self
    }

    pub fn position(mut self, position: i64) -> Self {
        self.resource.position = Position::new(position);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.resource.enabled = enabled;
        self
    }

    pub fn image(mut self, image: &str) -> Self {
        self.resource.image = image.to_string();
        self
    }

    pub fn site_url(mut self, url: &str) -> Self {
        self.resource.site_url = Some(SiteUrl::parse(url).expect("valid url"));
        self
    }

    pub fn build(self) -> Resource {
        self.resource
    }
}

pub fn gallery_image(filename: &str, alt: &str, position: i64) -> ResourceImage {
    ResourceImage {
        id: ImageId::generate(),
        filename: filename.to_string(),
        alt: alt.to_string(),
        position: Position::new(position),
    }
}
