// src/domain/catalog/repository.rs
use crate::domain::catalog::entity::{NewResource, Resource, ResourceFilter, ResourcePatch};
use crate::domain::catalog::image::{ImageId, ImagePatch, NewResourceImage, ResourceImage};
use crate::domain::catalog::value_objects::{Position, ResourceId, ResourceSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Read side of a single resource collection. Implementations are bound to
/// one [`ResourceKind`](super::ResourceKind).
#[async_trait]
pub trait ResourceReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ResourceId) -> DomainResult<Option<Resource>>;
    /// Matching resources ordered by position ascending, ties by insertion.
    async fn list(&self, filter: &ResourceFilter) -> DomainResult<Vec<Resource>>;
    /// True when a resource other than `exclude` currently holds `slug`.
    async fn slug_exists(
        &self,
        slug: &ResourceSlug,
        exclude: Option<ResourceId>,
    ) -> DomainResult<bool>;
    async fn max_position(&self) -> DomainResult<Option<Position>>;
}

#[async_trait]
pub trait ResourceWriteRepository: Send + Sync {
    async fn insert(&self, resource: NewResource) -> DomainResult<Resource>;
    /// Returns `None` when no resource matched the patch id.
    async fn update(&self, patch: ResourcePatch) -> DomainResult<Option<Resource>>;
    /// Returns whether a resource was removed.
    async fn delete(&self, id: ResourceId) -> DomainResult<bool>;
}

/// Entities (products) that point at a resource through a nullable column.
#[async_trait]
pub trait DependentReferenceRepository: Send + Sync {
    /// Null out every reference to `id`; returns the number of rows touched.
    async fn clear_references(&self, id: ResourceId) -> DomainResult<u64>;
}

/// Gallery images owned by a resource.
#[async_trait]
pub trait ResourceImageRepository: Send + Sync {
    /// Images of `owner`, ordered by position. Empty when the owner is missing.
    async fn list(&self, owner: ResourceId) -> DomainResult<Vec<ResourceImage>>;
    async fn find(&self, owner: ResourceId, id: ImageId) -> DomainResult<Option<ResourceImage>>;
    /// Returns false when the owner does not exist.
    async fn push(&self, owner: ResourceId, image: NewResourceImage) -> DomainResult<bool>;
    /// Returns whether an image matched.
    async fn update(&self, owner: ResourceId, id: ImageId, patch: ImagePatch)
    -> DomainResult<bool>;
    /// Returns whether an image was removed.
    async fn pull(&self, owner: ResourceId, id: ImageId) -> DomainResult<bool>;
}
