// src/domain/catalog/services/slug.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::catalog::kind::ResourceKind;
use crate::domain::catalog::repository::ResourceReadRepository;
use crate::domain::catalog::reserved::is_reserved;
use crate::domain::catalog::value_objects::{ResourceId, ResourceSlug};
use crate::domain::errors::DomainResult;

/// Domain service producing collection-unique slugs for one resource kind.
///
/// The check against the repository is not atomic with the later write: two
/// concurrent requests may both see a slug as free. The store's unique index
/// catches that case and the caller retries.
pub struct SlugResolver {
    kind: ResourceKind,
    read_repo: Arc<dyn ResourceReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl SlugResolver {
    pub fn new(
        kind: ResourceKind,
        read_repo: Arc<dyn ResourceReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            kind,
            read_repo,
            generator,
        }
    }

    /// Normalize `candidate` and return the first variant (`base`, `base-1`,
    /// `base-2`, ...) not held by another resource of this kind.
    pub async fn resolve(
        &self,
        candidate: &str,
        exclude: Option<ResourceId>,
    ) -> DomainResult<ResourceSlug> {
        let base = self.normalize(candidate)?;

        let mut slug = base.clone();
        let mut counter = 1u64;

        while self.is_taken(&slug, exclude).await? {
            slug = base.with_suffix(counter);
            counter += 1;
        }

        Ok(slug)
    }

    /// Whether `slug` (taken verbatim) is already held by another resource.
    pub async fn exists(
        &self,
        slug: &ResourceSlug,
        exclude: Option<ResourceId>,
    ) -> DomainResult<bool> {
        self.read_repo.slug_exists(slug, exclude).await
    }

    fn normalize(&self, candidate: &str) -> DomainResult<ResourceSlug> {
        let token = self.generator.slugify(candidate);
        if token.is_empty() {
            ResourceSlug::new(self.kind.as_str())
        } else {
            ResourceSlug::new(token)
        }
    }

    async fn is_taken(
        &self,
        slug: &ResourceSlug,
        exclude: Option<ResourceId>,
    ) -> DomainResult<bool> {
        if is_reserved(slug.as_str()) {
            return Ok(true);
        }
        self.read_repo.slug_exists(slug, exclude).await
    }
}
