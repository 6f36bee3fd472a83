// src/application/queries/resources/slug_exists.rs
use super::ResourceQueryService;
use crate::{
    application::{dto::input::non_blank, error::ApplicationResult},
    domain::catalog::{ResourceId, ResourceSlug},
};

pub struct SlugExistsQuery {
    /// Resource asking; its own slug never counts.
    pub id: String,
    pub slug: Option<String>,
}

impl ResourceQueryService {
    /// Whether another resource of this kind already holds `slug` verbatim.
    pub async fn slug_exists(&self, query: SlugExistsQuery) -> ApplicationResult<bool> {
        let exclude = ResourceId::parse(&query.id)?;
        let Some(raw) = non_blank(query.slug.as_deref()) else {
            return Ok(false);
        };
        let slug = ResourceSlug::new(raw)?;
        Ok(self.slug_resolver.exists(&slug, Some(exclude)).await?)
    }
}
